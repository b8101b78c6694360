//! Error types for the query binding.

/// Errors raised by the request executor.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed ({status}): {message}")]
    Status {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Failed to parse API response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid credential header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl RequestError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors returned by the query operations.
#[derive(thiserror::Error, Debug)]
pub enum ChatError {
    /// The envelope could not be serialized. Filter values are already JSON,
    /// so only a failing `Serialize` impl passed to `encode_payload` gets here.
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Convenience result type.
pub type ChatResult<T> = Result<T, ChatError>;
