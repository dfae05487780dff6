//! Contact form.

use actix_web::{HttpResponse, http::StatusCode, web};
use blog_core::DomainError;
use blog_core::services::ContactMessage;
use blog_shared::dto::ContactForm;

use super::page;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::templates::{self, Nav};

/// GET /contact
pub async fn form(state: web::Data<AppState>, session: SessionContext) -> HttpResponse {
    let ctx = page(&state, &session).active(Nav::Contact);

    templates::html(StatusCode::OK, templates::contact(&ctx, false))
}

/// POST /contact
///
/// The visitor sees the confirmation whether or not the mail went out;
/// delivery problems are only logged.
pub async fn submit(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<ContactForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let message = ContactMessage {
        name: form.name,
        email: form.email,
        phone: form.phone,
        message: form.message,
    };

    match state.contact.submit(message).await {
        Ok(_) => {
            let ctx = page(&state, &session).active(Nav::Contact);
            Ok(templates::html(StatusCode::OK, templates::contact(&ctx, true)))
        }
        Err(DomainError::Validation(_)) => Err(AppError::BadRequest("Invalid input data".to_string())),
        Err(e) => Err(e.into()),
    }
}
