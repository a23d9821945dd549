use crate::models::*;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Base URL is fixed at build time through `BLOG_API_URL`.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("BLOG_API_URL")
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if (200..300).contains(&status) {
            serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            // Пытаемся распарсить сообщение об ошибке
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => Err(err.error),
                Err(_) => Err(format!("HTTP {}: {}", status, text)),
            }
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, String> {
        let response = Request::get(&self.url("/posts"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::read(response).await
    }

    pub async fn create_post(&self, req: &CreatePostRequest) -> Result<Vec<Post>, String> {
        let response = Request::post(&self.url("/posts"))
            .json(req)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::read(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
