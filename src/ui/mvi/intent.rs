//! Base trait for intents.

/// Marker trait for intent objects: key presses, call-to-action clicks and
/// timer expiries that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
