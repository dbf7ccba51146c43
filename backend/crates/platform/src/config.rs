//! Environment configuration helpers
//!
//! Thin typed readers over `std::env`. Applications assemble their own
//! config structs from these.

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Read a variable; unset and empty are both `None`.
pub fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read a variable that must be set.
pub fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::Missing(name.to_string()))
}

/// Parse a variable, falling back to `default` when unset.
pub fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

/// Boolean flag: `1/true/yes/on` or `0/false/no/off`, case-insensitive.
pub fn flag_or(name: &str, default: bool) -> Result<bool, ConfigError> {
    match optional(name) {
        Some(raw) => parse_flag(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name: name.to_string(),
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("PORT", " 8080 "), Ok(8080));
        assert!(matches!(
            parse_value::<u16>("PORT", "eighty"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("X", "TRUE"), Ok(true));
        assert_eq!(parse_flag("X", "on"), Ok(true));
        assert_eq!(parse_flag("X", "0"), Ok(false));
        assert!(parse_flag("X", "maybe").is_err());
    }

    #[test]
    fn test_unset_variable_uses_default() {
        let name = "LAW_OFFICE_TEST_SURELY_UNSET_VARIABLE";
        assert_eq!(optional(name), None);
        assert_eq!(parse_or(name, 5u32), Ok(5));
        assert_eq!(flag_or(name, true), Ok(true));
        assert_eq!(required(name), Err(ConfigError::Missing(name.to_string())));
    }

    #[test]
    fn test_missing_message_names_variable() {
        let err = ConfigError::Missing("DATABASE_URL".to_string());
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }
}
