//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::views;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email is outside the allow-listed office domain
    #[error("Email domain not allowed (expected @{domain})")]
    DomainNotAllowed { domain: String },

    /// Email is not a plausible address
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password must be at most {max} characters")]
    PasswordTooLong { max: usize },

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session missing, forged or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DomainNotAllowed { .. }
            | AuthError::InvalidEmail
            | AuthError::PasswordTooShort { .. }
            | AuthError::PasswordTooLong { .. }
            | AuthError::EmailTaken
            | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Errors that re-render the submitted form instead of failing the request.
    pub fn is_form_error(&self) -> bool {
        self.kind() == ErrorKind::BadRequest
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::DomainNotAllowed { .. } => {
                tracing::warn!(error = %self, "Auth attempt from outside the office domain");
            }
            _ => {
                tracing::debug!(error = %self.to_app_error(), "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        if let AuthError::SessionInvalid = self {
            return Redirect::to("/login").into_response();
        }
        let app = self.to_app_error();
        let status = StatusCode::from_u16(app.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if app.is_server_error() {
            views::MSG_GENERIC.to_string()
        } else {
            views::register_error_message(&self)
        };
        platform::html::error_page(status, &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_form_errors_are_bad_request() {
        let form_errors = [
            AuthError::DomainNotAllowed {
                domain: "alghalbilaw.com".to_string(),
            },
            AuthError::InvalidEmail,
            AuthError::PasswordTooShort { min: 8 },
            AuthError::PasswordTooLong { max: 128 },
            AuthError::EmailTaken,
            AuthError::InvalidCredentials,
        ];
        for err in form_errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{err}");
            assert!(err.is_form_error());
        }
    }

    #[test]
    fn test_server_errors() {
        let err = AuthError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_app_error().is_server_error());
        assert!(!err.is_form_error());
    }

    #[test]
    fn test_session_invalid_redirects_to_login() {
        let response = AuthError::SessionInvalid.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/login");
    }

    #[test]
    fn test_app_error_carries_kind_and_message() {
        let app = AuthError::EmailTaken.to_app_error();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
        assert_eq!(app.message(), "Email already registered");
        assert_eq!(AuthError::SessionInvalid.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_internal_error_renders_generic_page() {
        let response = AuthError::Internal("db password is hunter2".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(views::MSG_GENERIC));
        assert!(!html.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_client_error_outside_form_shows_its_message() {
        let response = AuthError::EmailTaken.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(views::MSG_EMAIL_TAKEN));
    }
}
