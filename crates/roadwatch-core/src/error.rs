//! Error types module
//!
//! Every failure of an analysis call is reported as a single `AnalysisError`.
//! Variants are produced where the failure happens (health probe, connection,
//! dispatch, decoding), and `AnalysisError::kind` folds them into the three
//! caller-facing categories.

use std::time::Duration;

/// Caller-facing error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The health probe failed; the backend process is not serving.
    BackendUnavailable,
    /// The backend could not be reached at the connection level.
    NetworkError,
    /// Everything else: HTTP failures, aborted requests, undecodable bodies.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BackendUnavailable => "backend_unavailable",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis backend is unavailable (health check returned {status}). Please ensure the backend server is running at {url}.")]
    BackendUnavailable { url: String, status: u16 },

    #[error("Network Error: Cannot connect to analysis backend at {url}. Ensure it's running and reachable.")]
    Network {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Analysis failed: {status} {reason} - {body}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Analysis request aborted: no response within {deadline:?}")]
    Aborted { deadline: Duration },

    #[error("Failed to parse analysis response: {0}")]
    Decode(String),

    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Fallback message used when a lower-level error carries no text.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to analyze road condition. Check backend connection.";

impl AnalysisError {
    /// Wrap a transport error that is neither a connection failure nor a
    /// deadline abort.
    pub fn request(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        let message = source.to_string();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        AnalysisError::Request { message, source }
    }

    pub fn kind(&self) -> ErrorKind {
        error_static_metadata(self).0
    }

    /// Suggested remediation for the operator
    pub fn suggested_action(&self) -> Option<&'static str> {
        error_static_metadata(self).1
    }
}

/// Static metadata for each variant: (kind, suggested_action).
fn error_static_metadata(err: &AnalysisError) -> (ErrorKind, Option<&'static str>) {
    match err {
        AnalysisError::BackendUnavailable { .. } => (
            ErrorKind::BackendUnavailable,
            Some("Start the analysis backend and retry"),
        ),
        AnalysisError::Network { .. } => (
            ErrorKind::NetworkError,
            Some("Check the backend URL and network connectivity"),
        ),
        AnalysisError::HttpStatus { status, .. } if *status < 500 => (
            ErrorKind::Unknown,
            Some("Check the media payload and try again"),
        ),
        AnalysisError::HttpStatus { .. } => (ErrorKind::Unknown, Some("Inspect the backend logs")),
        AnalysisError::Aborted { .. } => (
            ErrorKind::Unknown,
            Some("Submit a shorter clip or a smaller image"),
        ),
        AnalysisError::Decode(_) => (ErrorKind::Unknown, None),
        AnalysisError::Request { .. } => (ErrorKind::Unknown, Some("Check backend connection")),
        AnalysisError::InvalidConfig(_) => (
            ErrorKind::Unknown,
            Some("Set ROADWATCH_BACKEND_URL to a valid http(s) URL"),
        ),
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Decode(err.to_string())
    }
}
