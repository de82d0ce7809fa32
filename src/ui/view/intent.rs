use crate::site::Page;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIntent {
    /// Show `Page` and scroll back to the top.
    SetPage(Page),
    ScrollUp { lines: u16 },
    /// Scroll towards the end, never past `max`.
    ScrollDown { lines: u16, max: u16 },
    ScrollToTop,
}

impl Intent for ViewIntent {}
