mod common;

use common::{harness, harness_with, Harness, SpyDialer};
use crossterm::event::KeyCode;
use garagefront::config::Config;
use garagefront::site::Page;
use garagefront::ui::app::Focus;
use garagefront::ui::contact::{FormField, FormFields};
use std::time::Duration;

fn fill_and_submit(h: &mut Harness) {
    h.app.set_page(Page::Contact);
    h.press(KeyCode::Tab);
    assert_eq!(h.app.focus(), Focus::Form);
    h.type_text("Sarah Mitchell");
    h.press(KeyCode::Tab);
    h.type_text("954-555-0000");
    h.press(KeyCode::Tab);
    h.press(KeyCode::Right);
    h.press(KeyCode::Enter);
}

#[test]
fn submit_shows_acknowledgment_immediately() {
    let mut h = harness();
    fill_and_submit(&mut h);
    assert!(h.app.contact().is_submitted());
    assert!(!h.app.contact().shows_form());
    assert_eq!(h.app.focus(), Focus::Nav);
    assert!(h.app.is_reset_pending());
}

#[test]
fn form_returns_empty_after_five_seconds() {
    let mut h = harness();
    fill_and_submit(&mut h);

    h.advance(Duration::from_millis(4_900));
    assert!(h.app.contact().is_submitted());

    h.advance(Duration::from_millis(200));
    assert!(!h.app.contact().is_submitted());
    assert!(h.app.contact().shows_form());
    assert_eq!(h.app.contact().fields, FormFields::default());
    assert!(!h.app.is_reset_pending());
}

#[test]
fn empty_required_field_blocks_submission() {
    let mut h = harness();
    h.app.set_page(Page::Contact);
    h.press(KeyCode::Tab);
    h.type_text("Sarah");
    h.press(KeyCode::Enter);

    assert!(!h.app.contact().is_submitted());
    assert_eq!(h.app.contact().rejected, Some(FormField::Phone));
    assert_eq!(h.app.focus(), Focus::Form);
    assert!(!h.app.is_reset_pending());
}

#[test]
fn message_enter_inserts_newline_instead_of_submitting() {
    let mut h = harness();
    h.app.set_page(Page::Contact);
    h.press(KeyCode::Tab);
    h.type_text("Ana");
    h.press(KeyCode::Tab);
    h.type_text("954");
    h.press(KeyCode::Tab);
    h.press(KeyCode::Tab);
    h.type_text("door");
    h.press(KeyCode::Enter);
    assert!(!h.app.contact().is_submitted());
    assert_eq!(h.app.contact().fields.message, "door\n");

    h.press(KeyCode::Tab);
    h.press(KeyCode::Enter);
    assert!(h.app.contact().is_submitted());
}

#[test]
fn leaving_page_cancels_pending_reset() {
    let mut h = harness();
    fill_and_submit(&mut h);
    h.app.set_page(Page::Services);
    assert!(!h.app.is_reset_pending());

    h.app.set_page(Page::Contact);
    assert!(h.app.contact().shows_form());

    h.advance(Duration::from_secs(10));
    assert!(h.app.contact().shows_form());
}

#[test]
fn resubmission_gets_a_fresh_delay() {
    let mut h = harness();
    fill_and_submit(&mut h);
    h.advance(Duration::from_millis(5_100));
    assert!(h.app.contact().shows_form());

    h.press(KeyCode::Tab);
    h.type_text("James P.");
    h.press(KeyCode::Tab);
    h.type_text("954");
    h.press(KeyCode::Enter);
    assert!(h.app.contact().is_submitted());
    assert_eq!(h.app.contact().generation, 2);

    h.advance(Duration::from_secs(4));
    assert!(h.app.contact().is_submitted());
    h.advance(Duration::from_millis(1_100));
    assert!(!h.app.contact().is_submitted());
}

#[test]
fn reset_delay_comes_from_config() {
    let mut config = Config::default();
    config.form.reset_delay_ms = 1_000;
    let mut h = harness_with(config, SpyDialer::default());
    fill_and_submit(&mut h);

    h.advance(Duration::from_millis(1_050));
    assert!(h.app.contact().shows_form());
}
