//! Mapping stored posts to what the pages display.

use serde::Serialize;

use super::Post;

/// Image shown for any post whose title mentions Monty Python.
pub const MONTY_PYTHON_IMAGE: &str = "montyPython.jpg";

/// Image shown for any post whose title mentions Lego.
pub const LEGO_IMAGE: &str = "legos.jpg";

/// Display format for publish dates, e.g. `July 17, 2024`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// A post as rendered on the index and post pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
    pub image: String,
    pub body: String,
}

/// Build the display record for a post.
pub fn present(post: &Post) -> DisplayRecord {
    DisplayRecord {
        id: post.id,
        slug: post.slug.clone(),
        title: post.title.clone(),
        subtitle: post.subtitle.clone(),
        author: post.author.clone(),
        date: post.published_on.format(DATE_FORMAT).to_string(),
        image: display_image(&post.title, &post.image_url).to_string(),
        body: post.body.clone(),
    }
}

/// Pick the image for a title. Keyword overrides win over the stored
/// reference, checked in order: "monty python", then "lego".
pub fn display_image<'a>(title: &str, stored: &'a str) -> &'a str {
    let title = title.to_lowercase();
    if title.contains("monty python") {
        MONTY_PYTHON_IMAGE
    } else if title.contains("lego") {
        LEGO_IMAGE
    } else {
        stored
    }
}
