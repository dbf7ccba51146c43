//! Value Object Module

pub mod email;
pub mod email_domain;
pub mod session_token;
pub mod user_password;
