//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer (PostgreSQL and in-memory).

use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already
    /// registered, even if a concurrent request won the race.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Number of registered users
    async fn count(&self) -> AuthResult<u64>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID (expired sessions are returned; callers decide)
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; deleting a missing session is not an error
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
