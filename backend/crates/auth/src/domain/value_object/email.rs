//! Email Value Object
//!
//! A normalized (trimmed, lowercased), shape-checked email address.
//! Account identity is the normalized form, so `Ali@X.com` and `ali@x.com`
//! are the same account.

use crate::error::{AuthError, AuthResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Canonical form used for the domain gate and lookups.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Normalize and validate.
    pub fn new(raw: &str) -> AuthResult<Self> {
        let email = Self::normalize(raw);

        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(AuthError::InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Basic shape check: one `@`, non-empty local part, dotted domain.
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        // Rejects a second '@' as well
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains(".."))
    }

    /// Rebuild from a stored value (already normalized).
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, without the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("lawyer@alghalbilaw.com").is_ok());
        assert!(Email::new("first.last@alghalbilaw.com").is_ok());
        assert!(Email::new("user+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        for raw in [
            "",
            "   ",
            "lawyerexample.com",
            "lawyer@",
            "@alghalbilaw.com",
            "a@@alghalbilaw.com",
            "a@b@alghalbilaw.com",
            "lawyer@localhost",
            "lawyer@.alghalbilaw.com",
            "lawyer@alghalbilaw..com",
            "la wyer@alghalbilaw.com",
        ] {
            assert!(
                matches!(Email::new(raw), Err(AuthError::InvalidEmail)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("  Sara@AlGhalbiLaw.COM ").unwrap();
        assert_eq!(email.as_str(), "sara@alghalbilaw.com");
        assert_eq!(email.domain(), "alghalbilaw.com");
        assert_eq!(Email::normalize(" A@B.C "), "a@b.c");
    }
}
