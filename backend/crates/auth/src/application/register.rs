//! Register Use Case
//!
//! Creates a new account and signs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{SignedIn, open_session};
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input (raw form values)
pub struct RegisterInput {
    pub email: String,
    pub display_name: Option<String>,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Checks run in a fixed order: domain gate, email shape, password
    /// policy, duplicate. Nothing is stored unless all pass.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<SignedIn> {
        let normalized = Email::normalize(&input.email);
        let domain = &self.config.allowed_email_domain;

        let mut bootstrap = false;
        if !domain.is_allowed(&normalized) {
            bootstrap = self.bootstrap_open().await?;
            if !bootstrap {
                return Err(AuthError::DomainNotAllowed {
                    domain: domain.to_string(),
                });
            }
        }

        let email = Email::new(&normalized)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(
            &raw_password,
            self.config.pepper(),
            self.config.password_work_factor,
        )?;

        let user = User::new(email, input.display_name.as_deref(), password_hash);

        // Unique index still guards against a concurrent registration
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            bootstrap,
            "User registered"
        );

        open_session(self.session_repo.as_ref(), &self.config, &user).await
    }

    /// Bootstrap exemption applies only while no account exists.
    async fn bootstrap_open(&self) -> AuthResult<bool> {
        if !self.config.allow_bootstrap_registration {
            return Ok(false);
        }
        Ok(self.user_repo.count().await? == 0)
    }
}
