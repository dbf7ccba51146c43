//! Logout Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Destroy the session. Idempotent.
    pub async fn execute(&self, session_id: Uuid) -> AuthResult<()> {
        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }
}
