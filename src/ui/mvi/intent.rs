//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects: key presses, completion events, and
/// anything else that may move UI state forward.
pub trait Intent: Send + 'static {}
