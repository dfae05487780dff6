//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use blog_core::ports::{MailTransport, PasswordService, PostRepository, UserRepository};
use blog_core::{AuthGate, ContactRelay, PostService};
use blog_infra::database::connect;
use blog_infra::{
    Argon2PasswordService, DatabaseConfig, HttpMailRelay, InMemoryPostRepository,
    InMemoryUserRepository, SeaOrmPostRepository, SeaOrmUserRepository,
};
use migration::{Migrator, MigratorTrait};

use crate::config::{AppConfig, SiteConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub auth: Arc<AuthGate>,
    pub contact: Arc<ContactRelay>,
    pub site: SiteConfig,
}

type Stores = (Arc<dyn PostRepository>, Arc<dyn UserRepository>);

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Without a usable database the blog runs on in-memory stores, which
    /// lose everything on restart.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let (posts, users) = match &config.database {
            Some(db) => match open_database(db).await {
                Ok(stores) => stores,
                Err(e) => {
                    tracing::error!(
                        "Failed to open database: {}. Using in-memory fallback.",
                        e
                    );
                    in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory()
            }
        };

        let mail = HttpMailRelay::new(config.mail.clone())?;

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(
            posts,
            users,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(mail),
            config.site.clone(),
            config.mail.timeout,
        ))
    }

    /// Assemble the services from already-built adapters.
    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        mail: Arc<dyn MailTransport>,
        site: SiteConfig,
        mail_timeout: Duration,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(posts)),
            auth: Arc::new(AuthGate::new(users, passwords)),
            contact: Arc::new(ContactRelay::new(mail, site.owner_name.clone(), mail_timeout)),
            site,
        }
    }
}

async fn open_database(config: &DatabaseConfig) -> anyhow::Result<Stores> {
    let conn = connect(config).await?;
    Migrator::up(&conn, None).await?;
    tracing::info!("Database migrations applied");

    Ok((
        Arc::new(SeaOrmPostRepository::new(conn.clone())),
        Arc::new(SeaOrmUserRepository::new(conn)),
    ))
}

fn in_memory() -> Stores {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    )
}
