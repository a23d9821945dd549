use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Rejected locally, no request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BlogClientError {
    pub fn is_api_error(&self) -> bool {
        matches!(self, BlogClientError::Api { .. })
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, BlogClientError::InvalidRequest(_))
    }

    pub fn message(&self) -> String {
        match self {
            BlogClientError::Api { message, .. } | BlogClientError::InvalidRequest(message) => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}
