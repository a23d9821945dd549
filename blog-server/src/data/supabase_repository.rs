//! Repository backed by the hosted database's REST query API
//! (`/rest/v1/<table>`), the way the original deployment talked to storage.

use crate::data::post_repository::PostRepository;
use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

const POSTS_TABLE: &str = "posts";

#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
    error: Option<String>,
}

pub struct SupabasePostRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabasePostRepository {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            POSTS_TABLE
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_posts(response: Response) -> Result<Vec<Post>, DomainError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Vec<Post>>().await?);
        }

        let body = response.text().await?;
        let message = error_message(&body, status.as_u16());
        tracing::error!("Storage API returned {}: {}", status, message);
        Err(DomainError::Storage(message))
    }
}

/// Extracts the human-readable message from a REST error body.
fn error_message(body: &str, status: u16) -> String {
    match serde_json::from_str::<RestErrorBody>(body) {
        Ok(RestErrorBody {
            message: Some(message),
            ..
        }) => message,
        Ok(RestErrorBody {
            error: Some(error), ..
        }) => error,
        _ if !body.trim().is_empty() => body.to_string(),
        _ => format!("storage request failed with status {}", status),
    }
}

#[async_trait]
impl PostRepository for SupabasePostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc,id.desc")]);

        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!("Failed to reach storage API: {}", e);
            DomainError::from(e)
        })?;

        Self::read_posts(response).await
    }

    async fn create(&self, req: NewPost) -> Result<Vec<Post>, DomainError> {
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[req]);

        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!("Failed to reach storage API: {}", e);
            DomainError::from(e)
        })?;

        Self::read_posts(response).await
    }
}
