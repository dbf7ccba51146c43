//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTML forms, handlers, middleware, router
//!
//! ## Features
//! - Register / login with email + password, gated to one office domain
//! - Server-side sessions with signed cookie tokens
//! - Per-request session resolution (`load_session`) and route guard
//!   (`require_auth`) for other crates to reuse
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Cookie carries `session_id.HMAC(session_id)`; the row holds the expiry
//! - Login failures never reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::{
    AuthAppState, CurrentUser, SessionContext, auth_router, load_session, require_auth,
};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
