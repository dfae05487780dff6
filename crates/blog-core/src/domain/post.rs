use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::slugify;
use crate::error::DomainError;

/// Post entity - a published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub published_on: NaiveDate,
    /// Rich text body, stored as HTML.
    pub body: String,
    pub author: String,
    /// Image URL or asset filename.
    pub image_url: String,
}

impl Post {
    /// Replace the editable fields with those of `draft`, re-deriving the slug.
    /// The id and publish date are kept.
    pub fn apply(&mut self, draft: PostDraft) {
        self.slug = slugify(&draft.title);
        self.title = draft.title;
        self.subtitle = draft.subtitle;
        self.body = draft.body;
        self.author = draft.author;
        self.image_url = draft.image_url;
    }
}

/// The editable fields of a post, as submitted through the post form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub image_url: String,
    pub body: String,
}

impl PostDraft {
    /// Check that every field is filled in and the title yields a usable slug.
    ///
    /// Returns every problem found, not just the first.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for (label, value) in [
            ("Title", &self.title),
            ("Subtitle", &self.subtitle),
            ("Author", &self.author),
            ("Image URL", &self.image_url),
            ("Body", &self.body),
        ] {
            if value.trim().is_empty() {
                problems.push(format!("{label} is required"));
            }
        }
        if !self.title.trim().is_empty() && slugify(&self.title).trim_matches('-').is_empty() {
            problems.push("Title must contain at least one letter or digit".to_string());
        }
        problems
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(problems.join(", ")))
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            image_url: post.image_url.clone(),
            body: post.body.clone(),
        }
    }
}

/// A post that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub published_on: NaiveDate,
    pub body: String,
    pub author: String,
    pub image_url: String,
}

impl NewPost {
    /// Create a new post from a draft, published on the given date.
    pub fn from_draft(draft: PostDraft, published_on: NaiveDate) -> Self {
        Self {
            slug: slugify(&draft.title),
            title: draft.title,
            subtitle: draft.subtitle,
            published_on,
            body: draft.body,
            author: draft.author,
            image_url: draft.image_url,
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: i32) -> Post {
        Post {
            id,
            title: self.title,
            subtitle: self.subtitle,
            slug: self.slug,
            published_on: self.published_on,
            body: self.body,
            author: self.author,
            image_url: self.image_url,
        }
    }
}
