//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned into new states, carry all data needed to render the
/// view, and compare with `PartialEq` so tests can assert on transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
