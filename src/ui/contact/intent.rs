use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIntent {
    FocusNext,
    FocusPrev,
    /// Append a character to the focused text field.
    Input(char),
    Backspace,
    /// Line break in the message field; ignored elsewhere.
    Newline,
    NextService,
    PrevService,
    /// Submit action fired. Accepted only when name and phone are present.
    Submit,
    /// Deferred reset fired for the submission numbered `generation`.
    Reset { generation: u64 },
}

impl Intent for ContactIntent {}
