//! Error type for API operations and the server error-body contract.

use serde_json::Value;
use thiserror::Error;

/// Detail used when an error response body is not JSON.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors that can occur while talking to the feature server.
///
/// `Clone` so results can travel through the UI event channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never produced a response.
    #[error("Could not reach server: {0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a status code and the raw response body.
    ///
    /// - Body is not JSON: `"Unknown error"`.
    /// - `detail` is a non-empty string: that string.
    /// - `detail` is a list of `{"msg": ...}` objects: the messages joined.
    /// - Anything else: `"HTTP <status>"`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        ApiError::Rejected {
            status,
            detail: extract_detail(status, body),
        }
    }

    /// HTTP status for rejections, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

fn extract_detail(status: u16, body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return UNKNOWN_ERROR.to_string();
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        // FastAPI request validation errors
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                format!("HTTP {status}")
            } else {
                messages.join("; ")
            }
        }
        _ => format!("HTTP {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(status: u16, body: &str) -> String {
        ApiError::from_response(status, body.as_bytes()).to_string()
    }

    #[test]
    fn uses_detail_field() {
        assert_eq!(detail(404, r#"{"detail":"Feature not found"}"#), "Feature not found");
    }

    #[test]
    fn unparsable_body_is_unknown_error() {
        assert_eq!(detail(500, "<html>Internal Server Error</html>"), "Unknown error");
        assert_eq!(detail(502, ""), "Unknown error");
    }

    #[test]
    fn missing_or_empty_detail_falls_back_to_status() {
        assert_eq!(detail(503, r#"{"error":"busy"}"#), "HTTP 503");
        assert_eq!(detail(500, r#"{"detail":""}"#), "HTTP 500");
        assert_eq!(detail(500, r#"{"detail":null}"#), "HTTP 500");
        assert_eq!(detail(500, "[1,2,3]"), "HTTP 500");
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"too long"}]}"#;
        assert_eq!(detail(422, body), "field required; too long");
    }

    #[test]
    fn status_only_for_rejections() {
        assert_eq!(ApiError::from_response(409, b"{}").status(), Some(409));
        assert_eq!(ApiError::Transport("refused".into()).status(), None);
    }
}
