//! Read-only pages.

use blog_core::domain::DisplayRecord;
use maud::{Markup, PreEscaped, html};

use super::{PageContext, image_src, layout};

fn post_meta(post: &DisplayRecord) -> Markup {
    html! {
        p.text-muted { "Posted by " (post.author) " on " (post.date) }
    }
}

pub fn index(ctx: &PageContext, posts: &[DisplayRecord]) -> Markup {
    let content = html! {
        header.mb-4 {
            h1 { (ctx.owner) "'s Blog" }
            p.lead { "Thoughts, reviews and the odd sketch." }
        }
        @if posts.is_empty() {
            p { "Nothing has been posted yet." }
        }
        @for post in posts {
            article.mb-4 {
                a href={ "/post/" (post.slug) } {
                    h2 { (post.title) }
                    h3.h5.text-secondary { (post.subtitle) }
                }
                (post_meta(post))
                @if ctx.logged_in {
                    a.btn.btn-sm.btn-outline-danger href={ "/delete/" (post.id) } { "Delete" }
                }
            }
            hr;
        }
    };
    layout(ctx, "Home", content)
}

pub fn post(ctx: &PageContext, post: &DisplayRecord) -> Markup {
    let content = html! {
        article {
            img.img-fluid.mb-3 src=(image_src(&post.image)) alt=(post.title);
            h1 { (post.title) }
            h2.h4.text-secondary { (post.subtitle) }
            (post_meta(post))
            // Bodies are authored by logged-in admins only.
            div.post-body { (PreEscaped(&post.body)) }
            @if ctx.logged_in {
                div.mt-4 {
                    a.btn.btn-primary href={ "/edit-post/" (post.id) } { "Edit Post" }
                }
            }
        }
    };
    layout(ctx, &post.title, content)
}

pub fn about(ctx: &PageContext) -> Markup {
    let content = html! {
        h1 { "About Me" }
        p {
            "This is " (ctx.owner) "'s corner of the internet: film reviews, "
            "comedy and plastic bricks."
        }
    };
    layout(ctx, "About", content)
}

/// Contact page; after a successful submission it shows a thank-you note
/// instead of the form.
pub fn contact(ctx: &PageContext, submitted: bool) -> Markup {
    let content = html! {
        h1 { "Contact Me" }
        @if submitted {
            div.alert.alert-success { "Successfully sent your message" }
        } @else {
            p { "Have questions? Send a message and I will get back to you." }
            form method="post" action="/contact" {
                div.mb-3 {
                    label.form-label for="name" { "Name" }
                    input.form-control id="name" type="text" name="name" required;
                }
                div.mb-3 {
                    label.form-label for="email" { "Email Address" }
                    input.form-control id="email" type="email" name="email" required;
                }
                div.mb-3 {
                    label.form-label for="phone" { "Phone Number" }
                    input.form-control id="phone" type="tel" name="phone" required;
                }
                div.mb-3 {
                    label.form-label for="message" { "Message" }
                    textarea.form-control id="message" name="message" rows="5" required {}
                }
                button.btn.btn-primary type="submit" { "Send" }
            }
        }
    };
    layout(ctx, "Contact", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DisplayRecord {
        DisplayRecord {
            id: 4,
            slug: "the-lego-movie-review".to_string(),
            title: "The Lego Movie Review".to_string(),
            subtitle: "Everything is awesome".to_string(),
            author: "Ada".to_string(),
            date: "March 01, 2024".to_string(),
            image: "legos.jpg".to_string(),
            body: "<p>Bricks <em>everywhere</em></p>".to_string(),
        }
    }

    #[test]
    fn index_links_posts_by_slug() {
        let page = index(&PageContext::new("Ada", false), &[record()]).into_string();

        assert!(page.contains(r#"href="/post/the-lego-movie-review""#));
        assert!(page.contains("Posted by Ada on March 01, 2024"));
        assert!(!page.contains("/delete/4"));
    }

    #[test]
    fn post_body_is_rendered_as_html() {
        let page = post(&PageContext::new("Ada", false), &record()).into_string();

        assert!(page.contains("<em>everywhere</em>"));
        assert!(page.contains(r#"src="/static/img/legos.jpg""#));
        assert!(!page.contains("/edit-post/4"));
    }

    #[test]
    fn logged_in_readers_get_edit_link() {
        let page = post(&PageContext::new("Ada", true), &record()).into_string();

        assert!(page.contains(r#"href="/edit-post/4""#));
    }

    #[test]
    fn contact_swaps_form_for_confirmation() {
        let ctx = PageContext::new("Ada", false);

        assert!(contact(&ctx, false).into_string().contains("<form"));
        let done = contact(&ctx, true).into_string();
        assert!(done.contains("Successfully sent your message"));
        assert!(!done.contains("<form"));
    }
}
