//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the initial state and lets `App` move the current value out
/// with `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
