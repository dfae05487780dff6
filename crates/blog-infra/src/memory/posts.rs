use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct PostTable {
    rows: BTreeMap<i32, Post>,
    last_id: i32,
}

impl PostTable {
    fn check_unique(&self, id: Option<i32>, title: &str, slug: &str) -> Result<(), RepoError> {
        for row in self.rows.values().filter(|row| Some(row.id) != id) {
            if row.title == title {
                return Err(RepoError::Constraint("posts.title".to_string()));
            }
            if row.slug == slug {
                return Err(RepoError::Constraint("posts.slug".to_string()));
            }
        }
        Ok(())
    }
}

/// Post repository backed by a `BTreeMap` behind an async `RwLock`.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        table.check_unique(None, &post.title, &post.slug)?;

        // Ids are never reused, as with an autoincrement column.
        table.last_id += 1;
        let post = post.into_post(table.last_id);
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        table.check_unique(Some(post.id), &post.title, &post.slug)?;

        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| row.slug == slug).cloned())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let mut posts: Vec<Post> = table.rows.values().cloned().collect();
        posts.sort_by(|a, b| (b.published_on, b.id).cmp(&(a.published_on, a.id)));
        posts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(posts)
    }
}
