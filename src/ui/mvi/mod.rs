//! Model-View-Intent (MVI) primitives for the storefront UI.
//!
//! ```text
//! Key press / timer ──→ Intent ──→ Reducer ──→ State ──→ frame
//!        ↑                                                 │
//!        └─────────────────────────────────────────────────┘
//! ```
//!
//! `App` is the single root holder of every feature state; reducers are the
//! only place those states change.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
