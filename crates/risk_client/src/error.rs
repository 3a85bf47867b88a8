//! Assessment error types

use thiserror::Error;

/// Errors that can occur while obtaining a risk assessment
///
/// None of these mutate case state: the coordinator records the failure
/// per case and the user retries by editing again. No automatic retry is
/// performed.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The service could not be reached (connect, timeout, mid-body drop)
    #[error("Risk service unreachable: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Risk service returned status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded or violated payload invariants
    #[error("Malformed risk payload: {0}")]
    MalformedPayload(String),
}

impl AssessmentError {
    /// Creates a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        AssessmentError::Transport(message.into())
    }

    /// Creates a status error
    pub fn status(status: u16) -> Self {
        AssessmentError::Status { status }
    }

    /// Creates a malformed-payload error
    pub fn malformed(message: impl Into<String>) -> Self {
        AssessmentError::MalformedPayload(message.into())
    }

    /// Returns true if this failure may succeed when the user retries
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AssessmentError::Transport(_) | AssessmentError::Status { status: 500..=599 }
        )
    }
}

impl From<reqwest::Error> for AssessmentError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AssessmentError::transport(format!("request timed out: {error}"))
        } else if error.is_decode() {
            AssessmentError::malformed(error.to_string())
        } else {
            AssessmentError::transport(error.to_string())
        }
    }
}
