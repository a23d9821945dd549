//! Typed HTTP client for the blog posts service.

pub mod error;
pub mod http_client;
pub mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::Post;
