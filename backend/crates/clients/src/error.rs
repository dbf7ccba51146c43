//! Clients Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::views;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client name is required")]
    NameRequired,

    #[error("Client name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NameRequired | ClientError::NameTooLong { .. } => ErrorKind::BadRequest,
            ClientError::Database(_) | ClientError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Errors that re-render the form instead of failing the request.
    pub fn is_form_error(&self) -> bool {
        self.kind() == ErrorKind::BadRequest
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub(crate) fn log(&self) {
        match self {
            ClientError::Database(e) => {
                tracing::error!(error = %e, "Clients database error");
            }
            ClientError::Internal(msg) => {
                tracing::error!(message = %msg, "Clients internal error");
            }
            _ => {
                tracing::debug!(error = %self.to_app_error(), "Client validation failed");
            }
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        self.log();
        let app = self.to_app_error();
        let status = StatusCode::from_u16(app.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if app.is_server_error() {
            views::MSG_GENERIC
        } else {
            views::error_message(&self)
        };
        platform::html::error_page(status, message)
    }
}
