//! Check Session Use Case
//!
//! Resolves a cookie token to a live session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Verify the token signature, load the session and enforce expiry.
    ///
    /// An expired session is deleted on sight; if that delete fails the
    /// session is still rejected and the row is left for `cleanup_expired`.
    pub async fn execute(&self, session_token: &str) -> AuthResult<AuthSession> {
        let session_id = SessionToken::verify(session_token, &self.config.session_secret)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            match self.session_repo.delete(session_id).await {
                Ok(()) => tracing::debug!(session_id = %session_id, "Expired session removed"),
                Err(e) => tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Failed to remove expired session"
                ),
            }
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
