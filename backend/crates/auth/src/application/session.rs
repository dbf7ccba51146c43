//! Session opening shared by register and login.

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Result of a successful register or login
#[derive(Debug)]
pub struct SignedIn {
    /// Signed cookie value
    pub session_token: SessionToken,
    pub session: AuthSession,
}

pub(crate) async fn open_session<S>(
    session_repo: &S,
    config: &AuthConfig,
    user: &User,
) -> AuthResult<SignedIn>
where
    S: AuthSessionRepository,
{
    let session = AuthSession::new(user, config.session_ttl_chrono());
    let session_token = SessionToken::issue(session.session_id, &config.session_secret)?;

    session_repo.create(&session).await?;

    Ok(SignedIn {
        session_token,
        session,
    })
}
