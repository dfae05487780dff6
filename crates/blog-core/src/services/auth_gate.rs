//! Registration, login and the session guard.

use std::sync::Arc;

use crate::domain::{NewUser, SessionIdentity, User, mask_email};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, UserRepository};

/// Verifies credentials and issues session identities.
pub struct AuthGate {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthGate {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Create a user, storing only a salted hash of the password.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        if password.is_empty() {
            return Err(DomainError::Validation("Password is required".to_string()));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already registered".to_string()));
        }

        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = self
            .users
            .create(NewUser::new(email, password_hash))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => {
                    DomainError::Conflict("Email already registered".to_string())
                }
                other => other.into(),
            })?;

        tracing::info!(user_id = user.id, email = %mask_email(&user.email), "User registered");
        Ok(user)
    }

    /// Check credentials and return the identity to keep in the session.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError> {
        let email = email.trim();
        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::debug!(email = %mask_email(email), "Login for unknown email");
            return Err(DomainError::Unauthorized);
        };

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .unwrap_or_else(|e| {
                tracing::warn!(user_id = user.id, error = %e, "Stored password hash unreadable");
                false
            });

        if !valid {
            tracing::debug!(user_id = user.id, "Login with wrong password");
            return Err(DomainError::Unauthorized);
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(SessionIdentity::from(&user))
    }
}

/// Guard for operations that need a logged-in caller.
pub fn require_session(caller: Option<&SessionIdentity>) -> Result<&SessionIdentity, DomainError> {
    caller.ok_or(DomainError::Unauthorized)
}
