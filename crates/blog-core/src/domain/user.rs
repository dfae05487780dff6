use serde::{Deserialize, Serialize};

/// User entity - a credential record for the blog admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

/// A user that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Mask an email address so it can be logged without leaking PII.
///
/// Keeps the first character of the local part and the whole domain:
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    let Some(at_pos) = email.find('@') else {
        return "***".to_string();
    };
    let (local, domain) = email.split_at(at_pos);
    let mut chars = local.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{first}***{domain}"),
        _ => format!("***{domain}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_local_part() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@b.com"), "***@b.com");
        assert_eq!(mask_email("élodie@example.fr"), "é***@example.fr");
    }

    #[test]
    fn masks_everything_without_at_sign() {
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
