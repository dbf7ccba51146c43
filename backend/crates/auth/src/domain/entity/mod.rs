//! Entities

pub mod auth_session;
pub mod user;
