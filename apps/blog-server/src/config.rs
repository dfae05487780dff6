//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use actix_web::cookie::Key;
use blog_infra::{DatabaseConfig, MailRelayConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub session: SessionConfig,
    pub site: SiteConfig,
    pub mail: MailRelayConfig,
}

/// Cookie session settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// Raw signing/encryption secret; at least 64 bytes.
    pub secret: Option<String>,
    pub ttl_hours: i64,
    pub secure_cookie: bool,
}

// Keep the secret out of debug output.
impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_hours", &self.ttl_hours)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_hours: 24,
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    /// Build the cookie key. A missing or short secret falls back to a
    /// random key, which invalidates sessions on every restart.
    pub fn key(&self) -> Key {
        match self.secret.as_deref().map(|s| Key::try_from(s.as_bytes())) {
            Some(Ok(key)) => key,
            Some(Err(_)) => {
                tracing::warn!("SESSION_KEY is shorter than 64 bytes; using a random key");
                Key::generate()
            }
            None => {
                tracing::warn!("SESSION_KEY not set; using a random key");
                Key::generate()
            }
        }
    }
}

/// Settings shown on the site itself.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub owner_name: String,
    pub home_post_limit: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let required = |key: &str| {
            lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
                tracing::warn!(key, "Setting missing; using placeholder");
                sentinel(key)
            })
        };

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1),
            });

        let session = SessionConfig {
            secret: lookup("SESSION_KEY").filter(|s| !s.is_empty()),
            ttl_hours: parse_or(&lookup, "SESSION_TTL_HOURS", 24),
            secure_cookie: lookup("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };

        let site = SiteConfig {
            owner_name: required("SITE_OWNER"),
            home_post_limit: parse_or(&lookup, "HOME_POST_LIMIT", 3),
        };

        let mail = MailRelayConfig {
            endpoint: required("MAIL_API_URL"),
            api_key: required("MAIL_API_KEY"),
            from_address: required("MAIL_FROM"),
            to_address: required("MAIL_TO"),
            timeout: Duration::from_secs(parse_or(&lookup, "MAIL_TIMEOUT_SECS", 10)),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080),
            database,
            session,
            site,
            mail,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Placeholder for a missing setting, visible wherever it ends up.
pub fn sentinel(key: &str) -> String {
    format!("<unset {key}>")
}
