//! Router composition

use auth::domain::repository::{AuthSessionRepository, UserRepository};
use auth::{AuthAppState, auth_router, load_session};
use axum::{Json, Router, middleware::from_fn_with_state, routing::get};
use clients::{ClientsAppState, clients_router, domain::ClientRepository};
use kernel::error::app_error::AppError;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}

/// Full application router.
///
/// `load_session` wraps everything, including the fallback, so each request
/// resolves its cookie exactly once.
pub fn build_router<R, C>(auth_state: AuthAppState<R>, clients_state: ClientsAppState<C>) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .merge(auth_router(auth_state.clone()))
        .merge(clients_router(clients_state))
        .fallback(not_found)
        .layer(from_fn_with_state(auth_state, load_session::<R>))
        .layer(TraceLayer::new_for_http())
}
