//! Transport error types

/// Errors that can occur during a single HTTP round trip.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message} ({url})")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase of the status.
        message: String,
        /// The URL that produced the response.
        url: String,
    },

    /// Network failure or malformed response body.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },

    /// The request body could not be encoded.
    #[error("The request body could not be encoded: {0}")]
    BodyEncoding(#[source] serde_json::Error),
}

impl HttpError {
    /// Creates a new response error.
    pub fn response(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Response {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Creates a new transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if the server answered with a failure status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
