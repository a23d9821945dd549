use crate::error::BlogClientError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    /// Both fields must be non-empty; the text itself is kept as typed.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, BlogClientError> {
        let (title, content) = (title.into(), content.into());

        if title.is_empty() || content.is_empty() {
            return Err(BlogClientError::InvalidRequest(
                "Title and content are required".to_string(),
            ));
        }

        Ok(Self { title, content })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
