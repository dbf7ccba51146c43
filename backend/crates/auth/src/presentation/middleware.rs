//! Auth Middleware
//!
//! `load_session` runs on every request and resolves the cookie once into a
//! [`SessionContext`]. `require_auth` guards protected routes and hands the
//! handler a [`CurrentUser`].

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::id::UserId;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Signed-in user, available to protected handlers as `Extension<CurrentUser>`
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub session_id: Uuid,
}

impl CurrentUser {
    /// Name for the page header; falls back to the email.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

impl From<AuthSession> for CurrentUser {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user_id,
            email: session.email.as_str().to_string(),
            display_name: session.display_name,
            session_id: session.session_id,
        }
    }
}

/// Per-request session state. Anonymous when `user` is `None`.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub user: Option<CurrentUser>,
}

/// Reads the context left by [`load_session`]; anonymous if the layer is absent.
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Resolve the session cookie and attach a [`SessionContext`].
///
/// Missing, forged or expired cookies leave the request anonymous. A storage
/// failure fails the request.
pub async fn load_session<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
        .map(str::to_string);

    let user = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
            match use_case.execute(&token).await {
                Ok(session) => Some(CurrentUser::from(session)),
                Err(AuthError::SessionInvalid) => None,
                Err(e) => return e.into_response(),
            }
        }
        None => None,
    };

    req.extensions_mut().insert(SessionContext { user });
    next.run(req).await
}

/// Redirect anonymous requests to `/login`; otherwise expose `CurrentUser`.
pub async fn require_auth(mut req: Request, next: Next) -> Response {
    let user = req
        .extensions()
        .get::<SessionContext>()
        .and_then(|ctx| ctx.user.clone());

    match user {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
