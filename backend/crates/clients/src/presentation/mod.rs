//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::ClientsAppState;
pub use router::clients_router;
