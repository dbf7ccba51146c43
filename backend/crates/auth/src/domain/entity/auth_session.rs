//! Auth Session Entity
//!
//! Server-side session record. The cookie only carries the signed
//! `session_id`; everything else lives here.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user_id: UserId,
    /// Email snapshot taken at sign-in
    pub email: Email,
    /// Display name snapshot taken at sign-in
    pub display_name: Option<String>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Open a session for `user`.
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    /// A TTL past the representable range saturates instead of overflowing.
    pub fn new(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id: user.user_id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            expires_at_ms: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
                .timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}
