//! Public read-only pages.

use actix_web::{HttpResponse, http::StatusCode, web};

use super::page;
use crate::middleware::error::AppResult;
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::templates::{self, Nav};

/// GET / and /home - the latest posts.
pub async fn home(state: web::Data<AppState>, session: SessionContext) -> AppResult<HttpResponse> {
    let posts = state.posts.latest(state.site.home_post_limit).await?;
    let ctx = page(&state, &session).active(Nav::Home);

    Ok(templates::html(StatusCode::OK, templates::index(&ctx, &posts)))
}

/// GET /post/{slug}
pub async fn show_post(
    state: web::Data<AppState>,
    session: SessionContext,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.show(&slug).await?;
    let ctx = page(&state, &session);

    Ok(templates::html(StatusCode::OK, templates::post(&ctx, &post)))
}

/// GET /about
pub async fn about(state: web::Data<AppState>, session: SessionContext) -> HttpResponse {
    let ctx = page(&state, &session).active(Nav::About);

    templates::html(StatusCode::OK, templates::about(&ctx))
}
