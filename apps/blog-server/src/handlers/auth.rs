//! Registration, login and logout.

use actix_web::{HttpResponse, http::StatusCode, web};
use blog_core::DomainError;
use blog_shared::dto::{LoginForm, RegisterForm};

use super::{page, see_other};
use crate::middleware::error::AppResult;
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::templates;

const LOGIN_FAILED: &str = "Login Unsuccessful. Please check email and password";
const ACCOUNT_CREATED: &str = "Your account has been created! You can now log in";

/// GET /register
pub async fn register_form(state: web::Data<AppState>, session: SessionContext) -> HttpResponse {
    let ctx = page(&state, &session);

    templates::html(
        StatusCode::OK,
        templates::register(&ctx, &RegisterForm::default(), &[]),
    )
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let outcome = if form.passwords_match() {
        state.auth.register(&form.email, &form.password).await
    } else {
        Err(DomainError::Validation("Passwords must match".to_string()))
    };

    let (status, message) = match outcome {
        Ok(_) => {
            session.flash(ACCOUNT_CREATED)?;
            return Ok(see_other("/login"));
        }
        Err(DomainError::Validation(msg)) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        Err(DomainError::Conflict(msg)) => (StatusCode::CONFLICT, msg),
        Err(e) => return Err(e.into()),
    };

    let ctx = page(&state, &session);
    Ok(templates::html(status, templates::register(&ctx, &form, &[message])))
}

/// GET /login
pub async fn login_form(state: web::Data<AppState>, session: SessionContext) -> HttpResponse {
    let ctx = page(&state, &session);

    templates::html(StatusCode::OK, templates::login(&ctx, &LoginForm::default(), &[]))
}

/// POST /login
///
/// Every credential failure looks the same to the visitor.
pub async fn login(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.auth.authenticate(&form.email, &form.password).await {
        Ok(identity) => {
            session.log_in(&identity)?;
            Ok(see_other("/"))
        }
        Err(DomainError::Unauthorized) => {
            let ctx = page(&state, &session);
            Ok(templates::html(
                StatusCode::UNAUTHORIZED,
                templates::login(&ctx, &form, &[LOGIN_FAILED.to_string()]),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /logout
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.log_out();
    see_other("/")
}
