//! Pages with forms. Each form can be re-rendered with the submitted values
//! and a list of problems.

use blog_shared::dto::{LoginForm, PostForm, RegisterForm};
use maud::{Markup, html};

use super::{PageContext, layout};

/// Whether the post form creates a post or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFormAction {
    New,
    Edit(i32),
}

impl PostFormAction {
    fn target(self) -> String {
        match self {
            PostFormAction::New => "/new-post".to_string(),
            PostFormAction::Edit(id) => format!("/edit-post/{id}"),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            PostFormAction::New => "New Post",
            PostFormAction::Edit(_) => "Edit Post",
        }
    }
}

fn problems(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            div.alert.alert-danger role="alert" {
                ul.mb-0 {
                    @for error in errors {
                        li { (error) }
                    }
                }
            }
        }
    }
}

fn text_field(label: &str, name: &str, kind: &str, value: &str) -> Markup {
    html! {
        div.mb-3 {
            label.form-label for=(name) { (label) }
            input.form-control id=(name) type=(kind) name=(name) value=(value) required;
        }
    }
}

pub fn post_form(
    ctx: &PageContext,
    form: &PostForm,
    errors: &[String],
    action: PostFormAction,
) -> Markup {
    let content = html! {
        h1 { (action.heading()) }
        (problems(errors))
        form method="post" action=(action.target()) {
            (text_field("Blog Post Title", "title", "text", &form.title))
            (text_field("Subtitle", "subtitle", "text", &form.subtitle))
            (text_field("Your Name", "author", "text", &form.author))
            (text_field("Blog Image URL", "img_url", "text", &form.img_url))
            div.mb-3 {
                label.form-label for="body" { "Blog Content" }
                textarea.form-control id="body" name="body" rows="12" required { (form.body) }
            }
            button.btn.btn-primary type="submit" { "Submit Post" }
        }
    };
    layout(ctx, action.heading(), content)
}

pub fn register(ctx: &PageContext, form: &RegisterForm, errors: &[String]) -> Markup {
    let content = html! {
        h1 { "Register" }
        (problems(errors))
        form method="post" action="/register" {
            (text_field("Email", "email", "email", &form.email))
            (text_field("Password", "password", "password", ""))
            (text_field("Confirm Password", "confirm_password", "password", ""))
            button.btn.btn-primary type="submit" { "Sign Up" }
        }
    };
    layout(ctx, "Register", content)
}

pub fn login(ctx: &PageContext, form: &LoginForm, errors: &[String]) -> Markup {
    let content = html! {
        h1 { "Log In" }
        (problems(errors))
        form method="post" action="/login" {
            (text_field("Email", "email", "email", &form.email))
            (text_field("Password", "password", "password", ""))
            button.btn.btn-primary type="submit" { "Log In" }
        }
    };
    layout(ctx, "Log In", content)
}
