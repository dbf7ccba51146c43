//! Presentation Layer
//!
//! HTTP handlers, forms, views, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, SessionContext, load_session, require_auth};
pub use router::auth_router;
