//! Page state without any browser types, so the transitions can be tested natively.

use crate::models::{CreatePostRequest, Post};

/// Unsaved input of the create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// `None` when either field is empty; such a draft is never sent.
    pub fn submission(&self) -> Option<CreatePostRequest> {
        if self.title.is_empty() || self.content.is_empty() {
            return None;
        }

        Some(CreatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub posts: Vec<Post>,
    pub draft: Draft,
    pub loading: bool,
    /// A create request is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

impl Feed {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// The server's list replaces whatever was shown before.
    pub fn posts_loaded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.loading = false;
        self.error = None;
    }

    /// Returns the request to send, or `None` if the submit is blocked
    /// (incomplete draft, or a create already in flight).
    pub fn submit(&mut self) -> Option<CreatePostRequest> {
        if self.submitting {
            return None;
        }

        let req = self.draft.submission()?;
        self.submitting = true;
        self.loading = true;
        self.error = None;
        Some(req)
    }

    /// After a successful create the draft is emptied; the caller re-fetches.
    pub fn post_created(&mut self) {
        self.submitting = false;
        self.draft.clear();
    }

    /// Failures keep the current list and draft.
    pub fn failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
        self.loading = false;
    }
}
