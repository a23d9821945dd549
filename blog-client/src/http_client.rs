use crate::error::BlogClientError;
use crate::models::{CreatePostRequest, ErrorResponse, Post};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let url = self.url("/posts");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::handle_posts_response(response, StatusCode::OK).await
    }

    /// Creates a post and returns the record(s) the server stored.
    ///
    /// Nothing is sent when the title or the content is empty.
    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Vec<Post>, BlogClientError> {
        let request = CreatePostRequest::new(title, content)?;
        let url = self.url("/posts");
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(&request).send().await?;
        Self::handle_posts_response(response, StatusCode::CREATED).await
    }

    async fn handle_posts_response(
        response: Response,
        expected: StatusCode,
    ) -> Result<Vec<Post>, BlogClientError> {
        let status = response.status();

        if status == expected {
            return Ok(response.json::<Vec<Post>>().await?);
        }

        let error_text = response.text().await?;
        Err(BlogClientError::Api {
            status: status.as_u16(),
            message: error_message(&error_text),
        })
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
