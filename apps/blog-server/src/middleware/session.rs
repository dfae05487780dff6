//! Cookie session plumbing: the middleware factory and the handler-side
//! view of the session (logged-in identity plus one-shot flash messages).

use actix_session::{
    Session, SessionMiddleware, config::PersistentSession, storage::CookieSessionStore,
};
use actix_web::{
    FromRequest, HttpRequest,
    cookie::{Key, SameSite, time::Duration},
    dev::Payload,
};
use blog_core::domain::SessionIdentity;
use futures::future::LocalBoxFuture;

use crate::config::SessionConfig;
use crate::middleware::error::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "blog_session";

const IDENTITY_KEY: &str = "identity";
const FLASH_KEY: &str = "flash";

/// Build the session middleware. Cookie content is encrypted with `key`.
pub fn session_middleware(key: Key, config: &SessionConfig) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_secure(config.secure_cookie)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(config.ttl_hours)),
        )
        .build()
}

/// The current visitor's session.
pub struct SessionContext(Session);

impl SessionContext {
    /// Identity of the logged-in user, if any. An unreadable entry counts as
    /// logged out.
    pub fn identity(&self) -> Option<SessionIdentity> {
        match self.0.get::<SessionIdentity>(IDENTITY_KEY) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session identity");
                self.0.remove(IDENTITY_KEY);
                None
            }
        }
    }

    /// Store the identity, rotating the session so a pre-login cookie
    /// cannot be replayed.
    pub fn log_in(&self, identity: &SessionIdentity) -> Result<(), AppError> {
        self.0.renew();
        self.0
            .insert(IDENTITY_KEY, identity)
            .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
    }

    /// Drop everything in the session. Safe to call when logged out.
    pub fn log_out(&self) {
        self.0.purge();
    }

    pub fn flash(&self, message: &str) -> Result<(), AppError> {
        self.0
            .insert(FLASH_KEY, message)
            .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
    }

    /// Read and clear the pending flash message.
    pub fn take_flash(&self) -> Option<String> {
        // Only touch the session when there is something to clear, so
        // plain page views do not rewrite the cookie.
        let message = self.0.get::<String>(FLASH_KEY).ok().flatten()?;
        self.0.remove(FLASH_KEY);
        Some(message)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { session.await.map(SessionContext) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn set_flash(session: SessionContext) -> Result<HttpResponse, AppError> {
        session.flash("Saved")?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn read_flash(session: SessionContext) -> HttpResponse {
        HttpResponse::Ok().body(session.take_flash().unwrap_or_default())
    }

    #[actix_web::test]
    async fn flash_is_shown_once() {
        let app = test::init_service(
            App::new()
                .wrap(session_middleware(Key::generate(), &SessionConfig::default()))
                .route("/set", web::get().to(set_flash))
                .route("/read", web::get().to(read_flash)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap()
            .into_owned();

        let first = test::call_service(
            &app,
            test::TestRequest::get().uri("/read").cookie(cookie.clone()).to_request(),
        )
        .await;
        let cleared = first
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap()
            .into_owned();
        assert_eq!(test::read_body(first).await, "Saved");

        let second = test::call_service(
            &app,
            test::TestRequest::get().uri("/read").cookie(cleared).to_request(),
        )
        .await;
        assert_eq!(test::read_body(second).await, "");
    }
}
