//! Backend error taxonomy shared by auth and data-access calls.

use serde::Deserialize;

/// Error returned by any request against the hosted backend.
///
/// `Clone + PartialEq` so failures can live inside reactive UI state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The REST endpoint answered with a non-success status.
    #[error("backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The identity endpoint rejected the request (bad credentials, expired token).
    #[error("auth rejected ({status}): {message}")]
    Auth { status: u16, message: String },

    /// A response body could not be decoded into the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No backend URL/key has been loaded yet.
    #[error("backend not configured")]
    NotConfigured,

    /// The call was made outside the browser (SSR), where no session exists.
    #[error("not available on server")]
    Unavailable,
}

impl BackendError {
    /// Whether the failure means the caller's credentials or token are invalid.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Auth { status: 400 | 401 | 403 | 422, .. } | Self::Status { status: 401 | 403, .. }
        )
    }
}

/// PostgREST error body (`{"message","code","details","hint"}`).
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
}

/// Build a [`BackendError::Status`] from a failed REST response.
///
/// Falls back to the raw body when it is not a PostgREST error document.
#[must_use]
pub fn rest_error(status: u16, body: &str) -> BackendError {
    let message = match serde_json::from_str::<RestErrorBody>(body) {
        Ok(parsed) => {
            let mut message = parsed.message.unwrap_or_else(|| "unknown error".to_owned());
            if let Some(code) = parsed.code {
                message = format!("{message} [{code}]");
            }
            if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
                message = format!("{message}: {details}");
            }
            message
        }
        Err(_) if body.trim().is_empty() => "empty response".to_owned(),
        Err(_) => body.trim().to_owned(),
    };
    BackendError::Status { status, message }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
