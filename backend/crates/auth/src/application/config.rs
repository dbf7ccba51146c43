//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::{random_bytes, sha256};
use platform::password::WorkFactor;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::email_domain::EmailDomain;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (12 hours)
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost for new hashes
    pub password_work_factor: WorkFactor,
    /// Only this email domain may register or log in
    pub allowed_email_domain: EmailDomain,
    /// Let the very first account register from any domain
    pub allow_bootstrap_registration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "law_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            password_work_factor: WorkFactor::default(),
            allowed_email_domain: EmailDomain::default(),
            allow_bootstrap_registration: false,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("password_work_factor", &self.password_work_factor)
            .field("allowed_email_domain", &self.allowed_email_domain)
            .field(
                "allow_bootstrap_registration",
                &self.allow_bootstrap_registration,
            )
            .finish()
    }
}

impl AuthConfig {
    /// Longest session lifetime accepted from configuration (one year)
    pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

    /// Derive the signing key from an operator-supplied phrase.
    pub fn with_secret_phrase(phrase: &str) -> Self {
        Self {
            session_secret: sha256(phrase.as_bytes()),
            ..Default::default()
        }
    }

    /// Create config with a random session secret.
    ///
    /// Sessions do not survive a restart.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session TTL as a chrono duration, capped at [`Self::MAX_SESSION_TTL`]
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        let secs = self.session_ttl.min(Self::MAX_SESSION_TTL).as_secs();
        chrono::Duration::seconds(secs as i64)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Session cookie attributes
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age: Some(self.session_ttl),
        }
    }
}
