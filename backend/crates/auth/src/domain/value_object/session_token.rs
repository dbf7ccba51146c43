//! Session Token
//!
//! Cookie value `"<session uuid>.<base64url HMAC-SHA256(session uuid)>"`.
//! The signature lets forged or tampered cookies be rejected before any
//! database lookup.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign a session id.
    pub fn issue(session_id: Uuid, secret: &[u8; 32]) -> AuthResult<Self> {
        let session_id = session_id.to_string();
        let signature = hmac_sha256(secret, session_id.as_bytes())
            .map_err(|e| AuthError::Internal(format!("Session signing failed: {e}")))?;

        Ok(Self(format!("{}.{}", session_id, to_base64url(&signature))))
    }

    /// Verify the signature and return the session id.
    pub fn verify(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
        let (session_id, signature_b64) =
            token.split_once('.').ok_or(AuthError::SessionInvalid)?;

        let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

        if !verify_hmac_sha256(secret, session_id.as_bytes(), &signature) {
            return Err(AuthError::SessionInvalid);
        }

        session_id.parse().map_err(|_| AuthError::SessionInvalid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
