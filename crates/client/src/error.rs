use thiserror::Error;

/// Shown for transport failures and unreadable response bodies.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Shown when an action outlives its deadline.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Errors surfaced by [`ServiceClient`](crate::ServiceClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The wall-clock deadline for the action elapsed.
    #[error("request deadline elapsed")]
    Timeout,
    /// Connection, TLS or transport failure.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
    /// A success response whose body did not parse.
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Text for the error toast.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(message) | ClientError::Service { message, .. } => {
                message.clone()
            }
            ClientError::Timeout => TIMEOUT_MESSAGE.to_string(),
            ClientError::Network(_) | ClientError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ClientError::InvalidConfig(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
