//! Creating, editing and deleting posts. Every route here needs a session.

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use blog_core::DomainError;
use blog_core::domain::PostDraft;
use blog_core::services::require_session;
use blog_shared::dto::PostForm;

use super::{POST_ROUTE, page, see_other};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::templates::{self, PostFormAction};

fn draft(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        author: form.author,
        image_url: form.img_url,
        body: form.body,
    }
}

fn prefill(draft: PostDraft) -> PostForm {
    PostForm {
        title: draft.title,
        subtitle: draft.subtitle,
        author: draft.author,
        img_url: draft.image_url,
        body: draft.body,
    }
}

/// Re-render the form for input the service refused, or pass the error on.
fn rejected(
    state: &AppState,
    session: &SessionContext,
    form: &PostForm,
    action: PostFormAction,
    err: DomainError,
) -> AppResult<HttpResponse> {
    let (status, errors) = match err {
        DomainError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, draft(form.clone()).problems()),
        DomainError::Conflict(msg) => (StatusCode::CONFLICT, vec![msg]),
        other => return Err(other.into()),
    };
    let ctx = page(state, session);

    Ok(templates::html(status, templates::post_form(&ctx, form, &errors, action)))
}

/// GET /new-post
pub async fn new_form(state: web::Data<AppState>, session: SessionContext) -> AppResult<HttpResponse> {
    let identity = session.identity();
    require_session(identity.as_ref())?;
    let ctx = page(&state, &session);

    Ok(templates::html(
        StatusCode::OK,
        templates::post_form(&ctx, &PostForm::default(), &[], PostFormAction::New),
    ))
}

/// POST /new-post
pub async fn create(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let identity = session.identity();

    match state.posts.create(identity.as_ref(), draft(form.clone())).await {
        Ok(_) => Ok(see_other("/")),
        Err(e) => rejected(&state, &session, &form, PostFormAction::New, e),
    }
}

/// GET /edit-post/{id} - the form prefilled from the stored post.
pub async fn edit_form(
    state: web::Data<AppState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let identity = session.identity();
    require_session(identity.as_ref())?;

    let post = state.posts.get(id).await?;
    let form = prefill(PostDraft::from(&post));
    let ctx = page(&state, &session);

    Ok(templates::html(
        StatusCode::OK,
        templates::post_form(&ctx, &form, &[], PostFormAction::Edit(id)),
    ))
}

/// Path of the post page, with the slug percent-encoded.
fn post_path(req: &HttpRequest, slug: &str) -> AppResult<String> {
    req.url_for(POST_ROUTE, [slug])
        .map(|url| url.path().to_string())
        .map_err(|e| AppError::Internal(format!("cannot build post URL: {e}")))
}

/// POST /edit-post/{id} - redirects to the post under its new slug.
pub async fn update(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: SessionContext,
    id: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let form = form.into_inner();
    let identity = session.identity();

    match state.posts.update(identity.as_ref(), id, draft(form.clone())).await {
        Ok(post) => Ok(see_other(&post_path(&req, &post.slug)?)),
        Err(e) => rejected(&state, &session, &form, PostFormAction::Edit(id), e),
    }
}

/// GET /delete/{id}
pub async fn delete(
    state: web::Data<AppState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let identity = session.identity();
    state.posts.delete(identity.as_ref(), id.into_inner()).await?;

    Ok(see_other("/"))
}
