use garagefront::site::{compose, Page};
use garagefront::ui::mvi::Reducer;
use garagefront::ui::view::{ViewIntent, ViewReducer, ViewState};

#[test]
fn initial_page_is_home_at_top() {
    let state = ViewState::default();
    assert_eq!(state.page, Page::Home);
    assert!(state.is_at_top());
}

#[test]
fn every_ordered_pair_transitions_in_one_step() {
    for from in Page::ALL {
        for to in Page::ALL {
            let state = ViewState {
                page: from,
                scroll: 7,
            };
            let next = ViewReducer::reduce(state, ViewIntent::SetPage(to));
            assert_eq!(next.page, to, "{from:?} -> {to:?}");
            assert_eq!(next.scroll, 0, "{from:?} -> {to:?} kept scroll");
        }
    }
}

#[test]
fn self_transition_leaves_composition_unchanged() {
    for page in Page::ALL {
        let state = ViewState { page, scroll: 0 };
        let next = ViewReducer::reduce(state, ViewIntent::SetPage(page));
        assert_eq!(next, state);
        assert_eq!(next.sections(), compose(page));
    }
}

#[test]
fn home_is_reachable_from_every_page() {
    for page in Page::ALL {
        let state = ViewReducer::reduce(ViewState { page, scroll: 3 }, ViewIntent::SetPage(Page::Home));
        assert_eq!(state, ViewState::default());
    }
}

#[test]
fn scrolling_keeps_page() {
    let state = ViewReducer::reduce(
        ViewState::default(),
        ViewIntent::ScrollDown { lines: 4, max: 100 },
    );
    assert_eq!(state.scroll, 4);
    let state = ViewReducer::reduce(state, ViewIntent::ScrollToTop);
    assert_eq!(state, ViewState::default());
}
