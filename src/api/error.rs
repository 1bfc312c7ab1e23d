use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Maximum length for error response bodies echoed into logs
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// What a call site sees when a request fails. Credential problems never
/// surface here; they are absorbed by the session before dispatch.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message} (status {status})")]
    Backend { status: StatusCode, message: String },

    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The HTTP transport itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Error body shape the backend uses for all failure responses.
#[derive(Deserialize)]
struct BackendError {
    message: Option<String>,
}

impl ApiError {
    /// Build the surfaced error for a non-success response, pulling the
    /// human-readable message out of the body when the backend sent one.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<BackendError>(body)
            .ok()
            .and_then(|parsed| parsed.message);
        let message = match message {
            Some(message) => message,
            None => {
                debug!(
                    status = %status,
                    body = %truncate_body(body),
                    "backend error body had no message field"
                );
                format!("request failed with status {status}")
            }
        };
        ApiError::Backend { status, message }
    }

    /// HTTP status of the failure, when a response arrived at all.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Network(error) | ApiError::Decode(error) | ApiError::Client(error) => {
                error.status()
            }
        }
    }

    /// Human-readable description: the backend's own message when there is
    /// one, otherwise a transport-level description.
    pub fn message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// True when the backend rejected the call as unauthenticated, which
    /// typically means the user must log in again.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Truncate a response body so logs stay readable. The body is
/// remote-controlled bytes, so the cut must land on a char boundary.
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut cut = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!(
        "{}... (truncated, {} total bytes)",
        &body[..cut],
        body.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_extracts_backend_message() {
        let error = ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"message":"Unauthorized"}"#);
        assert_eq!(error.status_code(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(error.message(), "Unauthorized");
    }

    #[test]
    fn test_from_response_falls_back_without_message() {
        let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(
            error.message(),
            "request failed with status 500 Internal Server Error"
        );
    }

    #[test]
    fn test_from_response_ignores_null_message() {
        let error = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"message":null}"#);
        assert_eq!(
            error.message(),
            "request failed with status 400 Bad Request"
        );
    }

    #[test]
    fn test_unauthorized_helper() {
        let unauthorized = ApiError::from_response(StatusCode::UNAUTHORIZED, "{}");
        assert!(unauthorized.is_unauthorized());
        let not_found = ApiError::from_response(StatusCode::NOT_FOUND, "{}");
        assert!(!not_found.is_unauthorized());
    }

    #[test]
    fn test_truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
        let long = "x".repeat(600);
        let truncated = truncate_body(&long);
        assert!(truncated.starts_with(&"x".repeat(500)));
        assert!(truncated.ends_with("(truncated, 600 total bytes)"));
    }

    #[test]
    fn test_truncate_body_cuts_on_a_char_boundary() {
        // 200 three-byte chars: the byte cap lands mid-character.
        let body = "€".repeat(200);
        let truncated = truncate_body(&body);
        let kept = truncated.chars().take_while(|c| *c == '€').count();
        // 498 bytes is the last full char under the cap.
        assert_eq!(kept, 166);
        assert!(truncated.ends_with("(truncated, 600 total bytes)"));
    }

    #[test]
    fn test_from_response_handles_multibyte_bodies_with_debug_logging() {
        // The fallback path logs the body; field evaluation only happens
        // when a subscriber at debug level is listening.
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let body = "€".repeat(200);
            let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
            assert_eq!(
                error.message(),
                "request failed with status 500 Internal Server Error"
            );
        });
    }
}
