//! URL slugs derived from post titles.
//!
//! A slug keeps only lowercase word characters and single hyphens, so
//! `"Hello,  World_Again"` is served from `/post/hello-world-again`.

/// Derive the URL-safe slug for a post title.
///
/// The title is lowercased, characters other than word characters,
/// whitespace and hyphens are dropped, surrounding whitespace is trimmed and
/// every run of whitespace, underscores or hyphens becomes a single `-`.
/// Applying it to its own output returns the output unchanged.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace() || c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_separator = false;
    for c in kept.trim().chars() {
        if is_separator(c) {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            slug.push('-');
            pending_separator = false;
        }
        slug.push(c);
    }
    if pending_separator {
        slug.push('-');
    }
    slug
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}
