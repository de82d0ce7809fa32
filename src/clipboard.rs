//! Hand-off of the business phone number to the host.
//!
//! A terminal has no dialer, so "Call Now" places the `tel:` URI on the
//! system clipboard where a softphone or the user can pick it up.

use arboard::Clipboard;

/// Receiver of `tel:` hand-offs.
pub trait Dialer {
    fn dial(&mut self, tel_uri: &str) -> Result<(), String>;
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// Dialer backed by the system clipboard, opened on first use.
#[derive(Default)]
pub struct ClipboardDialer {
    handler: Option<ClipboardHandler>,
}

impl Dialer for ClipboardDialer {
    fn dial(&mut self, tel_uri: &str) -> Result<(), String> {
        if self.handler.is_none() {
            let handler = ClipboardHandler::new()
                .map_err(|e| format!("Clipboard unavailable: {}", e))?;
            self.handler = Some(handler);
        }
        match self.handler.as_mut() {
            Some(handler) => handler.set_text(tel_uri),
            None => Err("Clipboard unavailable".to_string()),
        }
    }
}
