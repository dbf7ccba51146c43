//! Client value objects

use std::fmt;

use crate::error::{ClientError, ClientResult};

/// Full name of a client: trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    pub const MAX_CHARS: usize = 200;

    pub fn new(raw: &str) -> ClientResult<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ClientError::NameRequired);
        }
        if name.chars().count() > Self::MAX_CHARS {
            return Err(ClientError::NameTooLong {
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Restore from storage without re-validating
    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim an optional field; blank becomes `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
