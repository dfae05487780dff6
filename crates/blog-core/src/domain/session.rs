use serde::{Deserialize, Serialize};

use super::User;

/// Proof of a prior successful login, carried by the caller of guarded
/// operations for the duration of a browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: i32,
    pub email: String,
}

impl From<&User> for SessionIdentity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}
