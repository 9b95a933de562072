/**
 * Authenticator
 *
 * Registration and sign-in on top of a `CredentialStore`.
 *
 * # Registration
 *
 * 1. All four fields present and non-blank
 * 2. Email not yet present in the target role's table
 * 3. Password hashed with bcrypt on the blocking pool
 * 4. Row inserted; a unique violation still reads as a duplicate
 *
 * # Sign-in
 *
 * Walks the resolution chain donor -> medical staff -> admin. The first table
 * holding the email decides the role, and only that row's credential is
 * checked. Every failure path yields `AuthError::InvalidCredentials` so a
 * caller cannot tell an unknown email from a wrong password.
 */

use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::credentials::{hash_password, verify_password, CredentialError, CredentialVerifier};
use crate::backend::auth::sessions::SessionManager;
use crate::backend::auth::store::{CredentialStore, NewUser, StoreError};
use crate::shared::{Role, UserProfile};

/// Authenticator errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or blank registration field")]
    MissingFields,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    /// The uniqueness pre-check could not reach the store
    #[error("duplicate check failed: {0}")]
    DuplicateCheck(#[source] StoreError),

    /// A sign-in lookup could not reach the store
    #[error("credential lookup failed: {0}")]
    Lookup(#[source] StoreError),

    #[error("failed to save {role} account: {source}")]
    Persist {
        role: Role,
        #[source]
        source: StoreError,
    },

    #[error("password hashing failed: {0}")]
    Hashing(#[source] CredentialError),

    #[error("credential verification failed: {0}")]
    Verification(#[source] CredentialError),

    #[error("failed to issue session token: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

/// Account details submitted for registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

impl Registration {
    /// Every field must hold something other than whitespace
    pub fn validate(&self) -> Result<(), AuthError> {
        let fields = [&self.name, &self.email, &self.password, &self.date_of_birth];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

/// Successful sign-in
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: String,
}

/// One entry of the sign-in resolution chain
#[derive(Debug, Clone)]
struct ResolutionStep {
    role: Role,
    verifier: Arc<dyn CredentialVerifier>,
}

pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    sessions: Arc<SessionManager>,
    bcrypt_cost: u32,
    chain: Vec<ResolutionStep>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>, sessions: Arc<SessionManager>, bcrypt_cost: u32) -> Self {
        let chain = Role::LOGIN_ORDER
            .into_iter()
            .map(|role| ResolutionStep {
                role,
                verifier: store.credential_policy(role).verifier(),
            })
            .collect();

        Self {
            store,
            sessions,
            bcrypt_cost,
            chain,
        }
    }

    /// Create an account in the role's table and return its id
    pub async fn register(&self, role: Role, registration: Registration) -> Result<i64, AuthError> {
        registration.validate()?;

        let existing = self
            .store
            .find_by_email(role, &registration.email)
            .await
            .map_err(AuthError::DuplicateCheck)?;
        if existing.is_some() {
            tracing::warn!("{} email already exists", role);
            return Err(AuthError::DuplicateEmail);
        }

        let Registration {
            name,
            email,
            password,
            date_of_birth,
        } = registration;

        let encoded = hash_password(password, self.bcrypt_cost)
            .await
            .map_err(AuthError::Hashing)?;

        let user = NewUser {
            name,
            email,
            password: encoded,
            date_of_birth,
        };

        match self.store.insert(role, user).await {
            Ok(id) => {
                tracing::info!("Registered {} account {}", role, id);
                Ok(id)
            }
            Err(StoreError::Conflict) => {
                tracing::warn!("{} email claimed concurrently", role);
                Err(AuthError::DuplicateEmail)
            }
            Err(source) => Err(AuthError::Persist { role, source }),
        }
    }

    /// Register unless the email is already present in the role's table
    ///
    /// Returns `true` when a new account was created.
    pub async fn ensure_account(&self, role: Role, registration: Registration) -> Result<bool, AuthError> {
        match self.register(role, registration).await {
            Ok(_) => Ok(true),
            Err(AuthError::DuplicateEmail) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Authenticate against the resolution chain and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        for step in &self.chain {
            let Some(record) = self
                .store
                .find_by_email(step.role, email)
                .await
                .map_err(AuthError::Lookup)?
            else {
                continue;
            };

            let matched = verify_password(step.verifier.clone(), password.to_string(), record.password.clone())
                .await
                .map_err(AuthError::Verification)?;

            if !matched {
                tracing::warn!("Password mismatch for {} account {}", step.role, record.id);
                return Err(AuthError::InvalidCredentials);
            }

            let user = record.profile(step.role);
            let token = self.sessions.issue(&user)?;
            tracing::info!("{} account {} signed in", step.role, user.id);
            return Ok(LoginOutcome { user, token });
        }

        tracing::warn!("Sign-in attempt for unknown email");
        Err(AuthError::InvalidCredentials)
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
