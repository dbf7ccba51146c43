//! Application Layer

pub mod create_client;
pub mod list_clients;

pub use create_client::{CreateClientInput, CreateClientUseCase};
pub use list_clients::ListClientsUseCase;
