use crate::content::footer::quick_link_for;
use crate::site::Page;
use crate::ui::app::{App, Focus};
use crate::ui::contact::{ContactIntent, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Nav => handle_nav_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_nav_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('h') => app.set_page(Page::Home),
        KeyCode::Char('g') => app.set_page(Page::Contact),
        KeyCode::Char('c') => app.call_now(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(page) = Page::from_hotkey(ch) {
                app.set_page(page);
            }
        }
        KeyCode::Enter => app.activate_page_action(),
        KeyCode::Tab => {
            app.focus_form();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(app.page_height()),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page_height()),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char(ch) => {
            if let Some(link) = quick_link_for(ch) {
                app.open_quick_link(link);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let focused = app.contact().focus;
    match key.code {
        KeyCode::Esc => app.focus_nav(),
        KeyCode::Tab => app.dispatch_contact(ContactIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_contact(ContactIntent::FocusPrev),
        KeyCode::Enter if focused == FormField::Message => {
            app.dispatch_contact(ContactIntent::Newline)
        }
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Left if focused == FormField::Service => {
            app.dispatch_contact(ContactIntent::PrevService)
        }
        KeyCode::Right if focused == FormField::Service => {
            app.dispatch_contact(ContactIntent::NextService)
        }
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_contact(ContactIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
