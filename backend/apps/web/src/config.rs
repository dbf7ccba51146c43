//! Server configuration from the environment

use std::time::Duration;

use auth::AuthConfig;
use auth::models::email_domain::EmailDomain;
use platform::config::{self, ConfigError};

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_HOURS: u64 = 12;
const MAX_SESSION_TTL_HOURS: u64 = AuthConfig::MAX_SESSION_TTL.as_secs() / 3600;

pub struct WebConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
}

impl WebConfig {
    /// Release builds refuse to start without `SESSION_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let release = !cfg!(debug_assertions);

        let mut auth = session_config(config::optional("SESSION_SECRET"), release)?;
        auth.allowed_email_domain = email_domain(config::optional("ALLOWED_EMAIL_DOMAIN"))?;
        auth.allow_bootstrap_registration = config::flag_or("ALLOW_BOOTSTRAP_REGISTRATION", false)?;
        auth.session_ttl = session_ttl(config::parse_or(
            "SESSION_TTL_HOURS",
            DEFAULT_SESSION_TTL_HOURS,
        )?)?;
        auth.cookie_secure = config::flag_or("COOKIE_SECURE", release)?;
        auth.password_pepper = config::optional("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            port: config::parse_or("PORT", DEFAULT_PORT)?,
            database_url: config::required("DATABASE_URL")?,
            database_max_connections: config::parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            auth,
        })
    }
}

fn session_config(secret: Option<String>, release: bool) -> Result<AuthConfig, ConfigError> {
    match secret {
        Some(phrase) => Ok(AuthConfig::with_secret_phrase(&phrase)),
        None if release => Err(ConfigError::Missing("SESSION_SECRET".to_string())),
        None => {
            tracing::warn!("SESSION_SECRET not set, using a random key; sessions end on restart");
            Ok(AuthConfig::with_random_secret())
        }
    }
}

fn email_domain(raw: Option<String>) -> Result<EmailDomain, ConfigError> {
    match raw {
        Some(raw) => EmailDomain::new(&raw).map_err(|e| ConfigError::Invalid {
            name: "ALLOWED_EMAIL_DOMAIN".to_string(),
            value: raw.clone(),
            reason: e.message().to_string(),
        }),
        None => Ok(EmailDomain::default()),
    }
}

fn session_ttl(hours: u64) -> Result<Duration, ConfigError> {
    match hours.checked_mul(3600) {
        Some(secs) if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name: "SESSION_TTL_HOURS".to_string(),
            value: hours.to_string(),
            reason: format!("must be between 1 and {MAX_SESSION_TTL_HOURS}"),
        }),
    }
}
