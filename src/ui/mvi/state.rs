//! Base trait for UI state.

/// Marker trait for feature state.
///
/// States are cloneable snapshots holding everything a frame needs, and
/// comparable so tests can assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
