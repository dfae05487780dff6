use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewUser, User};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, UserRepository};

/// User repository backed by a `Vec` behind an async `RwLock`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i32> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.rows.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|u| u.id == id)
            .ok_or(RepoError::NotFound)?;
        rows.remove(position);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email".to_string()));
        }

        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            email: user.email,
            password_hash: user.password_hash,
        };
        rows.push(user.clone());
        Ok(user)
    }
}
