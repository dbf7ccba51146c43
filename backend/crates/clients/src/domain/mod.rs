//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::Client;
pub use repository::ClientRepository;
pub use value_object::ClientName;
