//! Allowed Email Domain
//!
//! The office domain gate: registration and login are only offered to
//! addresses ending in `@<domain>`.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Domain used when nothing is configured.
pub const DEFAULT_EMAIL_DOMAIN: &str = "alghalbilaw.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDomain(String);

impl EmailDomain {
    /// Accepts `example.com` or `@example.com`, any case.
    pub fn new(raw: &str) -> AppResult<Self> {
        let domain = raw.trim().trim_start_matches('@').to_lowercase();

        if domain.is_empty() || domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(AppError::bad_request(format!(
                "Invalid email domain: {raw:?}"
            )));
        }

        Ok(Self(domain))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Gate check on an already normalized email.
    pub fn is_allowed(&self, normalized_email: &str) -> bool {
        normalized_email
            .strip_suffix(self.0.as_str())
            .is_some_and(|rest| rest.ends_with('@'))
    }
}

impl Default for EmailDomain {
    fn default() -> Self {
        Self(DEFAULT_EMAIL_DOMAIN.to_string())
    }
}

impl fmt::Display for EmailDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
