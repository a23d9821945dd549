use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Storage(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl DomainError {
    /// Every failure is reported to callers as a client error.
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::Storage(_) | Self::InvalidBody(_) => 400,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_message_is_passed_through_verbatim() {
        let err = DomainError::Storage("relation \"posts\" does not exist".to_string());
        assert_eq!(err.to_string(), "relation \"posts\" does not exist");
        assert_eq!(err.to_status_code(), 400);
    }

    #[test]
    fn invalid_body_is_a_client_error() {
        let err = DomainError::InvalidBody("expected value at line 1".to_string());
        assert_eq!(err.to_status_code(), 400);
        assert!(err.to_string().starts_with("Invalid request body"));
    }

    #[test]
    fn sqlx_errors_become_storage_errors() {
        let err: DomainError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
