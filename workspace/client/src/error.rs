use thiserror::Error;

/// Error types for the prediction client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, timeout, body read)
    #[error("Network/API request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API Error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The API answered 2xx but the body does not have the expected shape
    #[error("Unexpected response from prediction API: {0}")]
    MalformedResponse(String),

    /// The HTTP client could not be constructed
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
