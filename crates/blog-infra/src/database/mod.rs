//! Database connection management and SeaORM repositories.

mod connections;
mod errors;
mod repositories;
mod sea_orm_base;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use repositories::{SeaOrmPostRepository, SeaOrmUserRepository};
pub use sea_orm_base::SeaOrmBaseRepository;

#[cfg(test)]
mod tests;
