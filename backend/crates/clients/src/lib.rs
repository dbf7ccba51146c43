//! Clients Backend Module
//!
//! Contact records for the firm's represented parties. Every record belongs
//! to the user who created it and is only ever listed for that user.
//!
//! Same layering as `auth`:
//! - `domain/` - `Client` entity, `ClientName`, repository trait
//! - `application/` - create / list use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - forms, handlers, views, router
//!
//! Routes rely on `auth::load_session` being layered outside the router.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{ClientError, ClientResult};
pub use infra::{memory::MemoryClientRepository, postgres::PgClientRepository};
pub use presentation::{ClientsAppState, clients_router};
