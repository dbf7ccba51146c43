//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::MemoryClientRepository;
pub use postgres::PgClientRepository;
