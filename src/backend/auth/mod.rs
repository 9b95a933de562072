//! Authentication Module
//!
//! Account registration, sign-in and session tokens for the three account
//! roles: donor, medical staff and admin.
//!
//! # Architecture
//!
//! - **`store`** - `CredentialStore` contract over the three user tables
//! - **`users`** - SQLite implementation of the store and the schema bootstrap
//! - **`credentials`** - bcrypt hashing and per-policy verifiers
//! - **`sessions`** - JWT issuance and verification
//! - **`authenticator`** - Registration and the ordered sign-in chain
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs            - Module exports and documentation
//! ├── store.rs          - Storage contract and records
//! ├── users.rs          - SQLite tables and queries
//! ├── credentials.rs    - Credential encoding
//! ├── sessions.rs       - JWT token management
//! ├── authenticator.rs  - Registration and sign-in
//! └── handlers/         - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: donor details → validated → password hashed → row inserted
//! 2. **Sign-in**: email resolved donor → staff → admin → password verified → JWT returned
//! 3. **Add admin**: admin JWT verified → details validated → admin row inserted

/// Credential store contract
pub mod store;

/// SQLite user tables
pub mod users;

/// Credential hashing and verification
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// Registration and sign-in
pub mod authenticator;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use authenticator::{AuthError, Authenticator, LoginOutcome, Registration};
pub use credentials::{CredentialError, CredentialPolicy, CredentialVerifier};
pub use handlers::{add_admin, sign_in, sign_up};
pub use sessions::{SessionClaims, SessionManager};
pub use store::{CredentialStore, NewUser, StoreError, UserRecord};
pub use users::{ensure_schema, RolePolicies, SqlCredentialStore};
