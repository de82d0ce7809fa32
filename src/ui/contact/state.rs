use crate::content::contact::SERVICE_TYPES;
use crate::ui::mvi::UiState;

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Phone,
    Service,
    Message,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Service,
        FormField::Message,
        FormField::Submit,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Phone | FormField::Message)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Phone => "Phone Number",
            FormField::Service => "Service Type",
            FormField::Message => "Message (Optional)",
            FormField::Submit => "Send Request Now",
        }
    }
}

/// Values typed into the form. `Default` is the empty form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    /// Index into [`SERVICE_TYPES`].
    pub service: usize,
    pub message: String,
}

impl FormFields {
    pub fn service_label(&self) -> &'static str {
        SERVICE_TYPES.get(self.service).copied().unwrap_or(SERVICE_TYPES[0])
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Phone => Some(&mut self.phone),
            FormField::Message => Some(&mut self.message),
            FormField::Service | FormField::Submit => None,
        }
    }

    /// First required field left blank, if any.
    pub fn first_missing(&self) -> Option<FormField> {
        if self.name.trim().is_empty() {
            Some(FormField::Name)
        } else if self.phone.trim().is_empty() {
            Some(FormField::Phone)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub fields: FormFields,
    pub focus: FormField,
    /// While true the acknowledgment panel replaces the form.
    pub submitted: bool,
    /// Required field that blocked the last submit attempt.
    pub rejected: Option<FormField>,
    /// Bumped on every accepted submission; resets carry the value they were
    /// scheduled for.
    pub generation: u64,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn shows_form(&self) -> bool {
        !self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_field() {
        let mut field = FormField::Name;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Submit);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let fields = FormFields {
            name: "  ".to_string(),
            phone: "954".to_string(),
            ..FormFields::default()
        };
        assert_eq!(fields.first_missing(), Some(FormField::Name));
    }

    #[test]
    fn default_service_is_repair() {
        assert_eq!(FormFields::default().service_label(), "Repair Service");
    }
}
