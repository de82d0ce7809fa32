use crate::site::{compose, Page, Section};
use crate::ui::mvi::UiState;

/// Which page is shown and how far its body is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub page: Page,
    /// Body lines scrolled past; 0 is the top of the page.
    pub scroll: u16,
}

impl UiState for ViewState {}

impl ViewState {
    /// Sections of the active page, in render order.
    pub fn sections(&self) -> &'static [Section] {
        compose(self.page)
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll == 0
    }
}
