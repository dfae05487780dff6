//! In-memory stores - used when no database is configured.
//!
//! Data is lost on process restart. Unique constraints match the SQL schema
//! so behaviour does not change when a database is added.

mod posts;
mod users;

pub use posts::InMemoryPostRepository;
pub use users::InMemoryUserRepository;
