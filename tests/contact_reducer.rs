use garagefront::ui::contact::{
    ContactFormState, ContactIntent, ContactReducer, FormField, FormFields,
};
use garagefront::ui::mvi::Reducer;

fn filled(name: &str, phone: &str) -> ContactFormState {
    ContactFormState {
        fields: FormFields {
            name: name.to_string(),
            phone: phone.to_string(),
            service: 2,
            message: "Spring snapped".to_string(),
        },
        ..ContactFormState::default()
    }
}

#[test]
fn submit_with_name_and_phone_sets_flag() {
    let state = ContactReducer::reduce(filled("Ana", "954-000"), ContactIntent::Submit);
    assert!(state.submitted);
    assert!(!state.shows_form());
    assert_eq!(state.generation, 1);
    assert_eq!(state.rejected, None);
}

#[test]
fn accepted_submit_clears_fields() {
    let state = ContactReducer::reduce(filled("Ana", "954-000"), ContactIntent::Submit);
    assert_eq!(state.fields, FormFields::default());
    assert_eq!(state.focus, FormField::Name);
}

#[test]
fn missing_name_blocks_submit() {
    let state = ContactReducer::reduce(filled("", "954-000"), ContactIntent::Submit);
    assert!(!state.submitted);
    assert_eq!(state.generation, 0);
    assert_eq!(state.rejected, Some(FormField::Name));
    assert_eq!(state.fields.phone, "954-000");
}

#[test]
fn missing_phone_blocks_submit_and_focuses_it() {
    let state = ContactReducer::reduce(filled("Ana", "   "), ContactIntent::Submit);
    assert!(!state.submitted);
    assert_eq!(state.rejected, Some(FormField::Phone));
    assert_eq!(state.focus, FormField::Phone);
}

#[test]
fn message_is_optional() {
    let mut state = filled("Ana", "954");
    state.fields.message.clear();
    let state = ContactReducer::reduce(state, ContactIntent::Submit);
    assert!(state.submitted);
}

#[test]
fn matching_reset_restores_empty_form() {
    let state = ContactReducer::reduce(filled("Ana", "954"), ContactIntent::Submit);
    let state = ContactReducer::reduce(state, ContactIntent::Reset { generation: 1 });
    assert!(!state.submitted);
    assert!(state.shows_form());
    assert_eq!(state.fields, FormFields::default());
}

#[test]
fn reset_without_submission_is_noop() {
    let state = ContactReducer::reduce(
        ContactFormState::default(),
        ContactIntent::Reset { generation: 0 },
    );
    assert_eq!(state, ContactFormState::default());
}

#[test]
fn submit_while_acknowledged_is_ignored() {
    let state = ContactReducer::reduce(filled("Ana", "954"), ContactIntent::Submit);
    let again = ContactReducer::reduce(state.clone(), ContactIntent::Submit);
    assert_eq!(again, state);
}
