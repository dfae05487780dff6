//! HTML rendering with maud.
//!
//! Every page goes through [`layout`], which draws the navigation (aware of
//! the login state), any pending flash message and the footer.

mod forms;
mod pages;

pub use forms::{PostFormAction, login, post_form, register};
pub use pages::{about, contact, index, post};

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use blog_shared::ErrorResponse;
use chrono::Datelike;
use maud::{DOCTYPE, Markup, html};

const STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Per-request values shared by every page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub owner: String,
    pub logged_in: bool,
    pub flash: Option<String>,
    pub active: Nav,
}

/// Top navigation entries; `None` highlights nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    About,
    Contact,
    None,
}

impl PageContext {
    pub fn new(owner: impl Into<String>, logged_in: bool) -> Self {
        Self {
            owner: owner.into(),
            logged_in,
            flash: None,
            active: Nav::None,
        }
    }

    pub fn active(mut self, nav: Nav) -> Self {
        self.active = nav;
        self
    }

    pub fn with_flash(mut self, flash: Option<String>) -> Self {
        self.flash = flash;
        self
    }
}

/// Wrap rendered markup in an HTML response.
pub fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(markup.into_string())
}

/// Where an image reference points: absolute URLs and paths as given, bare
/// file names from the bundled assets.
pub fn image_src(image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") || image.starts_with('/') {
        image.to_string()
    } else {
        format!("/static/img/{image}")
    }
}

fn nav_link(ctx: &PageContext, target: Nav, href: &str, label: &str) -> Markup {
    html! {
        li.nav-item {
            a.nav-link.active[ctx.active == target] href=(href) { (label) }
        }
    }
}

pub fn layout(ctx: &PageContext, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (ctx.owner) "'s Blog" }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                nav.navbar.navbar-expand-lg.navbar-light.bg-light {
                    div.container {
                        a.navbar-brand href="/" { (ctx.owner) "'s Blog" }
                        ul.navbar-nav.ms-auto {
                            (nav_link(ctx, Nav::Home, "/", "Home"))
                            (nav_link(ctx, Nav::About, "/about", "About"))
                            (nav_link(ctx, Nav::Contact, "/contact", "Contact"))
                            @if ctx.logged_in {
                                li.nav-item { a.nav-link href="/new-post" { "New Post" } }
                                li.nav-item { a.nav-link href="/logout" { "Log Out" } }
                            } @else {
                                li.nav-item { a.nav-link href="/login" { "Log In" } }
                                li.nav-item { a.nav-link href="/register" { "Register" } }
                            }
                        }
                    }
                }
                main.container.my-4 {
                    @if let Some(message) = &ctx.flash {
                        div.alert.alert-success role="alert" { (message) }
                    }
                    (content)
                }
                footer.container.border-top.py-3.text-muted {
                    "Copyright © " (ctx.owner) " " (chrono::Utc::now().year())
                }
            }
        }
    }
}

/// Standalone page for failed requests.
pub fn status_page(error: &ErrorResponse) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (error.status) " " (error.title) }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                main.container.my-5 {
                    h1 { (error.status) " " (error.title) }
                    @if let Some(detail) = &error.detail {
                        p.lead { (detail) }
                    }
                    a href="/" { "Back to the blog" }
                }
            }
        }
    }
}
