//! User Password Value Object
//!
//! Domain wrapper over `platform::password`: maps policy and hashing
//! failures onto [`AuthError`].

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordPolicyError, WorkFactor,
};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from a form. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password chosen at registration; length policy applies.
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => AuthError::PasswordTooShort { min },
            PasswordPolicyError::TooLong { max, .. } => AuthError::PasswordTooLong { max },
        })?;

        Ok(Self(clear_text))
    }

    /// Password typed at login; no policy, it only has to verify.
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Stored password hash (Argon2id PHC string).
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password.
    pub fn from_raw(
        raw: &RawPassword,
        pepper: Option<&[u8]>,
        work_factor: WorkFactor,
    ) -> AuthResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper, work_factor)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Rebuild from the database column.
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification; `pepper` must match the one used at hashing.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
