//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{SignedIn, open_session};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::entity::user::User;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input (raw form values)
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
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

    /// Unknown email, malformed email and wrong password all fail with
    /// `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<SignedIn> {
        let normalized = Email::normalize(&input.email);
        let domain = &self.config.allowed_email_domain;

        if !domain.is_allowed(&normalized) {
            return Err(AuthError::DomainNotAllowed {
                domain: domain.to_string(),
            });
        }

        let email = Email::new(&normalized).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::for_login(input.password);

        let user = self.user_repo.find_by_email(&email).await?;
        let user = self.authenticate(user, &raw_password)?;

        let signed_in = open_session(self.session_repo.as_ref(), &self.config, &user).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %signed_in.session.session_id,
            "User logged in"
        );

        Ok(signed_in)
    }

    /// An unknown email still pays for one Argon2 run at the configured
    /// work factor, so response time does not reveal which emails exist.
    fn authenticate(&self, user: Option<User>, raw_password: &RawPassword) -> AuthResult<User> {
        let pepper = self.config.pepper();
        match user {
            Some(user) if user.password_hash.verify(raw_password, pepper) => Ok(user),
            Some(_) => Err(AuthError::InvalidCredentials),
            None => {
                let _ = UserPassword::from_raw(
                    raw_password,
                    pepper,
                    self.config.password_work_factor,
                );
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::MemoryAuthRepository;
    use platform::password::WorkFactor;
    use std::time::Instant;

    async fn setup() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(MemoryAuthRepository::new());
        let config = Arc::new(AuthConfig {
            password_work_factor: WorkFactor::testing(),
            ..AuthConfig::development()
        });

        RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(RegisterInput {
                email: "a@alghalbilaw.com".to_string(),
                display_name: None,
                password: "Str0ngPassw0rd".to_string(),
            })
            .await
            .unwrap();

        (repo, config)
    }

    fn login(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_any_case() {
        let (repo, config) = setup().await;
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let signed_in = use_case
            .execute(login(" A@AlGhalbiLaw.com", "Str0ngPassw0rd"))
            .await
            .unwrap();

        assert_eq!(signed_in.session.email.as_str(), "a@alghalbilaw.com");
        assert_eq!(repo.session_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_the_same() {
        let (repo, config) = setup().await;
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let unknown = use_case
            .execute(login("nobody@alghalbilaw.com", "Str0ngPassw0rd"))
            .await
            .unwrap_err();
        let wrong = use_case
            .execute(login("a@alghalbilaw.com", "WrongPassw0rd"))
            .await
            .unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_email_costs_a_hash() {
        let work_factor = WorkFactor {
            memory_kib: 8 * 1024,
            iterations: 3,
            parallelism: 1,
        };
        let repo = Arc::new(MemoryAuthRepository::new());
        let config = Arc::new(AuthConfig {
            password_work_factor: work_factor,
            ..AuthConfig::development()
        });
        RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(RegisterInput {
                email: "a@alghalbilaw.com".to_string(),
                display_name: None,
                password: "Str0ngPassw0rd".to_string(),
            })
            .await
            .unwrap();
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let started = Instant::now();
        let wrong = use_case.execute(login("a@alghalbilaw.com", "WrongPassw0rd")).await;
        let known = started.elapsed();

        let started = Instant::now();
        let unknown = use_case
            .execute(login("nobody@alghalbilaw.com", "WrongPassw0rd"))
            .await;
        let missing = started.elapsed();

        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        // Both paths run Argon2 once; without it the miss is orders of magnitude faster.
        assert!(missing * 4 >= known, "miss {missing:?} vs wrong password {known:?}");
    }

    #[tokio::test]
    async fn test_foreign_domain_rejected() {
        let (repo, config) = setup().await;
        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(login("a@gmail.com", "Str0ngPassw0rd"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DomainNotAllowed { .. }));
    }

    #[tokio::test]
    async fn test_short_password_at_login_is_just_invalid() {
        let (repo, config) = setup().await;
        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(login("a@alghalbilaw.com", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_malformed_email_is_invalid_credentials() {
        let (repo, config) = setup().await;
        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(login("a b@alghalbilaw.com", "Str0ngPassw0rd"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
