//! HTTP client for the feature voting server.
//!
//! Three operations (list, create, vote), each a single request with no
//! retries. Every failure collapses into one [`ApiError`] carrying a
//! human-readable message.

mod client;
mod error;

pub use client::{ApiClient, FeatureApi};
pub use error::{ApiError, UNKNOWN_ERROR};
