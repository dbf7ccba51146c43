//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64url)
//! - Password hashing (Argon2id, NIST SP 800-63B length policy)
//! - Cookie management
//! - Server-rendered HTML layout (Arabic, right-to-left)
//! - Environment configuration helpers

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod html;
pub mod password;
