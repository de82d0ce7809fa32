use crate::content::contact::SERVICE_TYPES;
use crate::ui::mvi::Reducer;

use super::intent::ContactIntent;
use super::state::{ContactFormState, FormField, FormFields};

/// Reducer for the contact form.
///
/// Scheduling the delayed reset is left to the caller: after an accepted
/// `Submit` it arms a timer that dispatches `Reset` with the new generation.
pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if let ContactIntent::Reset { generation } = intent {
            return if state.submitted && state.generation == generation {
                ContactFormState {
                    submitted: false,
                    ..state
                }
            } else {
                state
            };
        }

        // The form is hidden behind the acknowledgment panel.
        if state.submitted {
            return state;
        }

        match intent {
            ContactIntent::FocusNext => ContactFormState {
                focus: state.focus.next(),
                ..state
            },
            ContactIntent::FocusPrev => ContactFormState {
                focus: state.focus.prev(),
                ..state
            },
            ContactIntent::Input(ch) => edit(state, |text| text.push(ch)),
            ContactIntent::Backspace => edit(state, |text| {
                text.pop();
            }),
            ContactIntent::Newline => {
                if state.focus == FormField::Message {
                    edit(state, |text| text.push('\n'))
                } else {
                    state
                }
            }
            ContactIntent::NextService => {
                let mut state = state;
                state.fields.service = (state.fields.service + 1) % SERVICE_TYPES.len();
                state
            }
            ContactIntent::PrevService => {
                let mut state = state;
                state.fields.service =
                    (state.fields.service + SERVICE_TYPES.len() - 1) % SERVICE_TYPES.len();
                state
            }
            ContactIntent::Submit => match state.fields.first_missing() {
                Some(missing) => ContactFormState {
                    focus: missing,
                    rejected: Some(missing),
                    ..state
                },
                None => ContactFormState {
                    fields: FormFields::default(),
                    focus: FormField::Name,
                    submitted: true,
                    rejected: None,
                    generation: state.generation.wrapping_add(1),
                },
            },
            ContactIntent::Reset { .. } => state,
        }
    }
}

/// Apply `f` to the focused text field, clearing a rejection on that field.
fn edit(mut state: ContactFormState, f: impl FnOnce(&mut String)) -> ContactFormState {
    let focus = state.focus;
    if let Some(text) = state.fields.text_mut(focus) {
        f(text);
        if state.rejected == Some(focus) {
            state.rejected = None;
        }
    }
    state
}
