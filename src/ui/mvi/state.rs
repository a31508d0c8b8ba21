//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable values: reducers consume the old state and return
/// a new one, and `PartialEq` lets the view detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
