//! In-memory repository
//!
//! Used by tests and local runs without PostgreSQL. A single write lock
//! covers every check-and-insert, so email uniqueness holds under
//! concurrent registration.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    /// Keyed by normalized email
    users: HashMap<String, User>,
    sessions: HashMap<Uuid, AuthSession>,
}

/// Process-local auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub fn session_count(&self) -> usize {
        self.state.read().sessions.len()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.state.read().users.get(email.as_str()).cloned())
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut state = self.state.write();
        if state.users.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }
        state
            .users
            .insert(user.email.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        Ok(self.state.read().users.len() as u64)
    }
}

impl AuthSessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.state
            .write()
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.state.read().sessions.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.state.write().sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self.state.write();
        let before = state.sessions.len();
        state.sessions.retain(|_, s| !s.is_expired_at(now_ms));
        Ok((before - state.sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};
    use platform::password::WorkFactor;

    fn user(email: &str) -> User {
        let raw = RawPassword::new("Str0ngPassw0rd".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None, WorkFactor::testing()).unwrap();
        User::new(Email::new(email).unwrap(), None, hash)
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = MemoryAuthRepository::new();
        let u = user("a@alghalbilaw.com");
        UserRepository::create(&repo, &u).await.unwrap();

        let found = repo.find_by_email(&u.email).await.unwrap().unwrap();
        assert_eq!(found.user_id, u.user_id);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_taken() {
        let repo = MemoryAuthRepository::new();
        UserRepository::create(&repo, &user("a@alghalbilaw.com"))
            .await
            .unwrap();
        let err = UserRepository::create(&repo, &user("A@alghalbilaw.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        let repo = MemoryAuthRepository::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            let u = user("race@alghalbilaw.com");
            handles.push(tokio::spawn(async move {
                UserRepository::create(&repo, &u).await.is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let repo = MemoryAuthRepository::new();
        let u = user("a@alghalbilaw.com");
        let live = AuthSession::new(&u, chrono::Duration::hours(1));
        let dead = AuthSession::new(&u, chrono::Duration::zero());
        AuthSessionRepository::create(&repo, &live).await.unwrap();
        AuthSessionRepository::create(&repo, &dead).await.unwrap();

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert!(repo.find_by_id(live.session_id).await.unwrap().is_some());
        assert!(repo.find_by_id(dead.session_id).await.unwrap().is_none());
    }
}
