//! Error conversions
//!
//! Turns [`AppError`] into an HTTP response (RFC 7807 problem details).

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side messages are replaced; details stay in the logs.
        let detail = if self.is_server_error() {
            self.kind().as_str()
        } else {
            self.message()
        };

        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": detail,
        });

        (status, Json(body)).into_response()
    }
}
