//! HTTP Handlers

use std::sync::Arc;

use axum::Extension;
use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase, SignedIn,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::middleware::{CurrentUser, SessionContext};
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// GET /
pub async fn index(ctx: SessionContext) -> Redirect {
    if ctx.user.is_some() {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/login")
    }
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page<R>(State(state): State<AuthAppState<R>>) -> Html<String>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Html(views::register_page(
        None,
        "",
        "",
        state.config.allowed_email_domain.as_str(),
    ))
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: form.email.clone(),
        display_name: Some(form.name.clone()),
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(signed_in) => signed_in_redirect(&state.config, &signed_in),
        Err(e) if e.is_form_error() => {
            e.log();
            let html = views::register_page(
                Some(&views::register_error_message(&e)),
                &form.email,
                &form.name,
                state.config.allowed_email_domain.as_str(),
            );
            (StatusCode::BAD_REQUEST, Html(html)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<R>(State(state): State<AuthAppState<R>>) -> Html<String>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Html(views::login_page(
        None,
        "",
        state.config.allowed_email_domain.as_str(),
    ))
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: form.email.clone(),
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(signed_in) => signed_in_redirect(&state.config, &signed_in),
        Err(e) if e.is_form_error() => {
            e.log();
            let html = views::login_page(
                Some(&views::login_error_message(&e)),
                &form.email,
                state.config.allowed_email_domain.as_str(),
            );
            (StatusCode::BAD_REQUEST, Html(html)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());
    // The cookie is cleared either way
    if let Err(e) = use_case.execute(user.session_id).await {
        tracing::warn!(error = %e, session_id = %user.session_id, "Failed to delete session on logout");
    }

    match platform::cookie::delete_cookie_header(&state.config.cookie_config()) {
        Ok(cookie) => ([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response(),
        Err(e) => AuthError::Internal(e.to_string()).into_response(),
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /dashboard
pub async fn dashboard(Extension(user): Extension<CurrentUser>) -> Html<String> {
    Html(views::dashboard_page(&user))
}

fn signed_in_redirect(config: &AuthConfig, signed_in: &SignedIn) -> Response {
    match platform::cookie::set_cookie_header(
        &config.cookie_config(),
        signed_in.session_token.as_str(),
    ) {
        Ok(cookie) => ([(header::SET_COOKIE, cookie)], Redirect::to("/dashboard")).into_response(),
        Err(e) => AuthError::Internal(e.to_string()).into_response(),
    }
}
