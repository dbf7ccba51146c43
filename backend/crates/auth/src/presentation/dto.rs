//! Form DTOs
//!
//! `application/x-www-form-urlencoded` bodies. Missing fields decode as
//! empty strings so a stripped-down form still gets a proper error page.

use serde::Deserialize;

/// POST /register
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// POST /login
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
