//! Contact form feature module.
//!
//! Manages the estimate-request form and its submit/acknowledge cycle.
//!
//! - `state.rs` - Field values, focus, the submitted flag
//! - `intent.rs` - Editing, submit, delayed reset
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `timer.rs` - Cancellable one-shot task that fires the reset

mod intent;
mod reducer;
mod state;
mod timer;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactFormState, FormField, FormFields};
pub use timer::ResetTimer;
