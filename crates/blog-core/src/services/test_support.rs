//! In-process fakes for service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;
use crate::ports::{AuthError, BaseRepository, PasswordService, PostRepository, UserRepository};

#[derive(Default)]
pub struct FakePostRepository {
    rows: Mutex<BTreeMap<i32, Post>>,
}

impl FakePostRepository {
    fn clashes(rows: &BTreeMap<i32, Post>, id: Option<i32>, title: &str, slug: &str) -> bool {
        rows.values()
            .any(|p| Some(p.id) != id && (p.title == title || p.slug == slug))
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for FakePostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl PostRepository for FakePostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if Self::clashes(&rows, None, &post.title, &post.slug) {
            return Err(RepoError::Constraint("posts.title".to_string()));
        }
        let id = rows.keys().next_back().map_or(1, |last| last + 1);
        let post = post.into_post(id);
        rows.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        if Self::clashes(&rows, Some(post.id), &post.title, &post.slug) {
            return Err(RepoError::Constraint("posts.title".to_string()));
        }
        rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.rows.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| (b.published_on, b.id).cmp(&(a.published_on, a.id)));
        posts.truncate(limit as usize);
        Ok(posts)
    }
}

#[derive(Default)]
pub struct FakeUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl BaseRepository<User, i32> for FakeUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email".to_string()));
        }
        let user = User {
            id: rows.len() as i32 + 1,
            email: user.email,
            password_hash: user.password_hash,
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct PlainPasswordService;

impl PasswordService for PlainPasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain${}", password.chars().rev().collect::<String>()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let stored = hash
            .strip_prefix("plain$")
            .ok_or_else(|| AuthError::HashingError("unknown hash format".to_string()))?;
        Ok(stored.chars().rev().collect::<String>() == password)
    }
}
