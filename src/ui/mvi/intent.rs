//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is one user action, such as editing a field or pressing
/// Submit. Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
