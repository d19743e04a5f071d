//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, picking an image)
/// - System events (store call results)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
