use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Generic repository trait for operations every table supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when no
    /// row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a user. Fails with `RepoError::Constraint` on a duplicate email.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a post. Fails with `RepoError::Constraint` when the title or
    /// slug is already taken.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite a stored post. Fails with `RepoError::NotFound` when the id
    /// is absent and `RepoError::Constraint` on a title or slug clash.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Look a post up by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// The newest posts, by publish date then id, newest first.
    async fn latest(&self, limit: u64) -> Result<Vec<Post>, RepoError>;
}
