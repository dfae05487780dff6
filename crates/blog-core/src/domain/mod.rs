//! Domain entities - the core business objects.

mod post;
mod presentation;
mod session;
mod slug;
mod user;

pub use post::{NewPost, Post, PostDraft};
pub use presentation::{DATE_FORMAT, DisplayRecord, LEGO_IMAGE, MONTY_PYTHON_IMAGE, display_image, present};
pub use session::SessionIdentity;
pub use slug::slugify;
pub use user::{NewUser, User, mask_email};
