//! HTTP handlers and route configuration.

mod auth;
mod contact;
mod health;
mod pages;
mod posts;

use actix_web::{HttpResponse, http::header, web};

use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::templates::PageContext;

/// Route name of the single-post page, for building its URL.
const POST_ROUTE: &str = "post";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Public pages
        .route("/", web::get().to(pages::home))
        .route("/home", web::get().to(pages::home))
        .route("/about", web::get().to(pages::about))
        .service(
            web::resource("/post/{slug}")
                .name(POST_ROUTE)
                .route(web::get().to(pages::show_post)),
        )
        .service(
            web::resource("/contact")
                .route(web::get().to(contact::form))
                .route(web::post().to(contact::submit)),
        )
        // Post management
        .service(
            web::resource("/new-post")
                .route(web::get().to(posts::new_form))
                .route(web::post().to(posts::create)),
        )
        .service(
            web::resource("/edit-post/{id}")
                .route(web::get().to(posts::edit_form))
                .route(web::post().to(posts::update)),
        )
        .route("/delete/{id}", web::get().to(posts::delete))
        // Accounts
        .service(
            web::resource("/register")
                .route(web::get().to(auth::register_form))
                .route(web::post().to(auth::register)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_form))
                .route(web::post().to(auth::login)),
        )
        .route("/logout", web::get().to(auth::logout));
}

/// Page context for the current visitor, consuming any pending flash.
fn page(state: &AppState, session: &SessionContext) -> PageContext {
    PageContext::new(&state.site.owner_name, session.identity().is_some())
        .with_flash(session.take_flash())
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
