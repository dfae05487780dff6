//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use blog_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    #[sea_orm(unique, indexed)]
    pub slug: String,
    pub published_on: Date,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author: String,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            slug: model.slug,
            published_on: model.published_on,
            body: model.body,
            author: model.author,
            image_url: model.image_url,
        }
    }
}

/// A fresh row; the database assigns the id.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            slug: Set(post.slug),
            published_on: Set(post.published_on),
            body: Set(post.body),
            author: Set(post.author),
            image_url: Set(post.image_url),
        }
    }
}

/// An existing row keyed by its id, with every other column overwritten.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Unchanged(post.id),
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            slug: Set(post.slug),
            published_on: Set(post.published_on),
            body: Set(post.body),
            author: Set(post.author),
            image_url: Set(post.image_url),
        }
    }
}
