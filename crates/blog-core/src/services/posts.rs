//! Post retrieval, slug routing and the guarded CRUD operations.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::require_session;
use crate::domain::{DisplayRecord, NewPost, Post, PostDraft, SessionIdentity, present};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const DUPLICATE_TITLE: &str = "A post with this title already exists";

/// Reads and writes posts on behalf of the route layer.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    today: fn() -> NaiveDate,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            today: || Local::now().date_naive(),
        }
    }

    /// Use a fixed clock for publish dates.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The newest posts, ready for display.
    pub async fn latest(&self, limit: u64) -> Result<Vec<DisplayRecord>, DomainError> {
        let posts = self.posts.latest(limit).await?;
        Ok(posts.iter().map(present).collect())
    }

    /// Find the post a slug points at.
    pub async fn resolve(&self, slug: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", slug))
    }

    /// Resolve a slug and present the post.
    pub async fn show(&self, slug: &str) -> Result<DisplayRecord, DomainError> {
        self.resolve(slug).await.map(|post| present(&post))
    }

    /// Fetch a post by id.
    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    pub async fn create(
        &self,
        caller: Option<&SessionIdentity>,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        let caller = require_session(caller)?;
        draft.validate()?;

        let post = self
            .posts
            .create(NewPost::from_draft(draft, (self.today)()))
            .await
            .map_err(|e| Self::write_error(e, None))?;

        tracing::info!(post_id = post.id, slug = %post.slug, user_id = caller.user_id, "Post created");
        Ok(post)
    }

    /// Replace the editable fields of post `id`. The slug follows the title.
    pub async fn update(
        &self,
        caller: Option<&SessionIdentity>,
        id: i32,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        let caller = require_session(caller)?;
        let mut post = self.get(id).await?;
        draft.validate()?;

        post.apply(draft);
        let post = self
            .posts
            .update(post)
            .await
            .map_err(|e| Self::write_error(e, Some(id)))?;

        tracing::info!(post_id = post.id, slug = %post.slug, user_id = caller.user_id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, caller: Option<&SessionIdentity>, id: i32) -> Result<(), DomainError> {
        let caller = require_session(caller)?;
        self.posts
            .delete(id)
            .await
            .map_err(|e| Self::write_error(e, Some(id)))?;

        tracing::info!(post_id = id, user_id = caller.user_id, "Post deleted");
        Ok(())
    }

    fn write_error(err: RepoError, id: Option<i32>) -> DomainError {
        match (err, id) {
            (RepoError::NotFound, Some(id)) => DomainError::not_found("Post", id),
            (RepoError::Constraint(_), _) => DomainError::Conflict(DUPLICATE_TITLE.to_string()),
            (other, _) => other.into(),
        }
    }
}
