//! User Entity
//!
//! A registered lawyer. Created once at registration and never mutated.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Normalized email, unique
    pub email: Email,
    /// Optional display name shown in the header
    pub display_name: Option<String>,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. A blank display name is stored as none.
    pub fn new(email: Email, display_name: Option<&str>, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            display_name: normalize_display_name(display_name),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

fn normalize_display_name(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
