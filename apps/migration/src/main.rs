//! Migration CLI tool. Pass `-v` for verbose output.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // `run_cli` installs its own tracing subscriber.
    cli::run_cli(migration::Migrator).await;
}
