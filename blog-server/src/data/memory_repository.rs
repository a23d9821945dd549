//! Process-local repository, used when no storage is configured and in tests.
//! Data is lost on restart.

use crate::data::post_repository::PostRepository;
use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: Vec<Post>,
    next_id: i64,
}

pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let table = self.table.read().await;

        let mut posts = table.rows.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts)
    }

    async fn create(&self, req: NewPost) -> Result<Vec<Post>, DomainError> {
        let mut table = self.table.write().await;

        let post = Post {
            id: table.next_id,
            title: req.title,
            content: req.content,
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.rows.push(post.clone());

        Ok(vec![post])
    }
}
