use crate::data::post_repository::PostRepository;
use crate::domain::{DomainError, NewPost, Post};
use std::sync::Arc;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.post_repo.list().await?;

        tracing::debug!("Listed {} posts", posts.len());

        Ok(posts)
    }

    /// Forwards the request to storage as-is; absent fields stay absent.
    pub async fn create_post(&self, req: NewPost) -> Result<Vec<Post>, DomainError> {
        let created = self.post_repo.create(req).await?;

        for post in &created {
            tracing::info!("Post created: id={}", post.id);
        }

        Ok(created)
    }
}
