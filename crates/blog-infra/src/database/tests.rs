use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use blog_core::domain::{NewPost, Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::repositories::{SeaOrmPostRepository, SeaOrmUserRepository};

fn post_model(id: i32, title: &str, slug: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        subtitle: "Subtitle".to_owned(),
        slug: slug.to_owned(),
        published_on: NaiveDate::from_ymd_opt(2024, 7, 17).unwrap(),
        body: "<p>Body</p>".to_owned(),
        author: "Siris".to_owned(),
        image_url: "cover.jpg".to_owned(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![post_model(1, "Test Post", "test-post")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result = BaseRepository::<Post, i32>::find_by_id(&repo, 1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_find_post_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![post_model(4, "The Lego Movie Review", "the-lego-movie-review")]])
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let found = repo.find_by_slug("the-lego-movie-review").await.unwrap();
    let missing = repo.find_by_slug("nothing-here").await.unwrap();

    assert_eq!(found.map(|p| p.id), Some(4));
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_latest_maps_rows_in_order() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![
            post_model(3, "Third", "third"),
            post_model(2, "Second", "second"),
        ]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let posts = repo.latest(2).await.unwrap();

    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[tokio::test]
async fn test_create_post_returns_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(9, "Fresh", "fresh")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let draft = PostDraft {
        title: "Fresh".to_owned(),
        subtitle: "Subtitle".to_owned(),
        author: "Siris".to_owned(),
        image_url: "cover.jpg".to_owned(),
        body: "<p>Body</p>".to_owned(),
    };

    let post = repo
        .create(NewPost::from_draft(
            draft,
            NaiveDate::from_ymd_opt(2024, 7, 17).unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(post.id, 9);
    assert_eq!(post.slug, "fresh");
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result = BaseRepository::<Post, i32>::delete(&repo, 42).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_user_by_email() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![user::Model {
            id: 1,
            email: "a@b.com".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
        }]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);

    let user = repo.find_by_email("a@b.com").await.unwrap().unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.password_hash, "$argon2id$stub");
}
