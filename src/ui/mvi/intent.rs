//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, voting, submitting) or the
/// outcome of a server request delivered back to the UI thread.
pub trait Intent: Send + 'static {}
