//! Backend Module
//!
//! Server-side code for BloodConnect: an Axum HTTP server in front of a
//! SQLite database holding the donor, medical-staff, admin and question
//! tables.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Endpoint table and router layers
//! - **`auth`** - Credential store, authenticator, session tokens, handlers
//! - **`questions`** - Question listing
//! - **`middleware`** - Bearer-token gate for admin routes
//! - **`error`** - HTTP error type
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── provision.rs    - Account provisioning binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── questions/      - Questionnaire
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → handler → `Authenticator` → `CredentialStore` → response
//!
//! Shared state is immutable after startup (`ServerConfig`, signing keys)
//! apart from the connection pool. Password hashing and verification run on
//! Tokio's blocking pool.

/// Server initialization, state and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// Onboarding questions
pub mod questions;

/// Request middleware
pub mod middleware;

/// Backend-specific error types
pub mod error;
