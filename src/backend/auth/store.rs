/**
 * Credential Store
 *
 * This module defines the storage contract the authenticator works against:
 * three independent user tables (donor, medical staff, admin), each keyed by
 * email, each holding a credential whose encoding policy is exposed per role.
 *
 * # Failure Model
 *
 * Connectivity, query and timeout failures surface as `StoreError`. Callers
 * map them to an opaque server error; the detail is only ever logged.
 */

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialPolicy;
use crate::shared::{Role, UserProfile};

/// A user row as stored, credential included
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Encoded credential (bcrypt hash, or plaintext for legacy staff/admin rows)
    pub password: String,
    pub date_of_birth: String,
}

impl UserRecord {
    /// Public view of this record under the role of the table it came from
    pub fn profile(&self, role: Role) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role,
        }
    }
}

/// A row to insert; `password` is already encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already present in the target table
    #[error("email already present in table")]
    Conflict,

    /// The underlying query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store did not answer within the configured bound
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Storage contract for the three user tables
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the record with this email in the role's table
    async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Insert a record into the role's table and return its generated id
    ///
    /// Fails with `StoreError::Conflict` when the email is already taken.
    async fn insert(&self, role: Role, user: NewUser) -> Result<i64, StoreError>;

    /// How credentials in the role's table are encoded
    fn credential_policy(&self, role: Role) -> CredentialPolicy;
}
