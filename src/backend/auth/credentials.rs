//! Credential encoding and verification
//!
//! Every role defaults to salted bcrypt hashes. Medical-staff and admin tables
//! may still hold plaintext credentials from before hashing was applied to
//! them; `LegacyPlaintextVerifier` accepts those while the
//! `LEGACY_PLAINTEXT_CREDENTIALS` flag is on.
//!
//! bcrypt is CPU-bound, so the async helpers here run it on the blocking pool.

use std::fmt::Debug;
use std::sync::Arc;

use bcrypt::BcryptError;
use thiserror::Error;
use tokio::task::JoinError;

/// Failure of a bcrypt operation run on the blocking pool
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Bcrypt(#[from] BcryptError),

    #[error("credential task failed: {0}")]
    Task(#[from] JoinError),
}

/// How the credentials of one table are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Salted bcrypt hash
    Bcrypt,
    /// Plaintext rows tolerated alongside bcrypt hashes
    LegacyPlaintext,
}

impl CredentialPolicy {
    /// Verifier implementing this policy
    pub fn verifier(self) -> Arc<dyn CredentialVerifier> {
        match self {
            CredentialPolicy::Bcrypt => Arc::new(BcryptVerifier),
            CredentialPolicy::LegacyPlaintext => Arc::new(LegacyPlaintextVerifier),
        }
    }
}

/// Checks a submitted password against a stored credential
pub trait CredentialVerifier: Debug + Send + Sync {
    fn verify(&self, submitted: &str, stored: &str) -> Result<bool, BcryptError>;
}

/// One-way verification against a bcrypt hash
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptVerifier;

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, submitted: &str, stored: &str) -> Result<bool, BcryptError> {
        bcrypt::verify(submitted, stored)
    }
}

/// Migration shim for rows written before staff and admin passwords were hashed
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyPlaintextVerifier;

impl CredentialVerifier for LegacyPlaintextVerifier {
    fn verify(&self, submitted: &str, stored: &str) -> Result<bool, BcryptError> {
        if looks_like_bcrypt(stored) {
            return bcrypt::verify(submitted, stored);
        }
        Ok(submitted == stored)
    }
}

/// Modular-crypt prefixes bcrypt emits: `$2a$`, `$2b$`, `$2x$`, `$2y$`
fn looks_like_bcrypt(stored: &str) -> bool {
    let bytes = stored.as_bytes();
    bytes.len() == 60
        && stored.starts_with("$2")
        && matches!(bytes.get(2), Some(b'a' | b'b' | b'x' | b'y'))
        && bytes.get(3) == Some(&b'$')
}

/// Hash a password on the blocking pool
pub async fn hash_password(password: String, cost: u32) -> Result<String, CredentialError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Run a verifier on the blocking pool
///
/// A stored value the verifier cannot parse is logged and counts as a
/// mismatch, so a corrupt row looks exactly like a wrong password.
pub async fn verify_password(
    verifier: Arc<dyn CredentialVerifier>,
    submitted: String,
    stored: String,
) -> Result<bool, CredentialError> {
    let outcome = tokio::task::spawn_blocking(move || verifier.verify(&submitted, &stored)).await?;

    match outcome {
        Ok(matched) => Ok(matched),
        Err(e) => {
            tracing::warn!("Stored credential could not be verified: {}", e);
            Ok(false)
        }
    }
}
