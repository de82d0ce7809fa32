use crate::ui::mvi::Reducer;

use super::intent::ViewIntent;
use super::state::ViewState;

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::SetPage(page) => ViewState { page, scroll: 0 },
            ViewIntent::ScrollUp { lines } => ViewState {
                scroll: state.scroll.saturating_sub(lines),
                ..state
            },
            ViewIntent::ScrollDown { lines, max } => ViewState {
                scroll: state.scroll.saturating_add(lines).min(max.max(state.scroll)),
                ..state
            },
            ViewIntent::ScrollToTop => ViewState { scroll: 0, ..state },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Page;

    #[test]
    fn set_page_scrolls_to_top() {
        let state = ViewState {
            page: Page::Home,
            scroll: 40,
        };
        let state = ViewReducer::reduce(state, ViewIntent::SetPage(Page::Services));
        assert_eq!(state.page, Page::Services);
        assert!(state.is_at_top());
    }

    #[test]
    fn scroll_down_clamps_to_max() {
        let state = ViewReducer::reduce(
            ViewState::default(),
            ViewIntent::ScrollDown { lines: 50, max: 12 },
        );
        assert_eq!(state.scroll, 12);
    }

    #[test]
    fn scroll_down_never_jumps_backwards_when_max_shrinks() {
        let state = ViewState {
            page: Page::Home,
            scroll: 20,
        };
        let state = ViewReducer::reduce(state, ViewIntent::ScrollDown { lines: 3, max: 5 });
        assert_eq!(state.scroll, 20);
    }

    #[test]
    fn scroll_up_saturates_at_zero() {
        let state = ViewState {
            page: Page::About,
            scroll: 2,
        };
        let state = ViewReducer::reduce(state, ViewIntent::ScrollUp { lines: 10 });
        assert_eq!(state.scroll, 0);
        assert_eq!(state.page, Page::About);
    }
}
