//! View controller feature module.
//!
//! Tracks the active page and the body scroll offset.
//!
//! - `state.rs` - Active page plus scroll position
//! - `intent.rs` - Navigation and scrolling
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::ViewState;
