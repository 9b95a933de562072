//! Backend Error Module
//!
//! HTTP-facing error type and its response conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError, status codes and client messages
//! └── conversion.rs - IntoResponse and JsonRejection conversion
//! ```
//!
//! Handlers return `Result<_, BackendError>`; authenticator errors convert via
//! `From<AuthError>` and body rejections via `From<JsonRejection>`, so `?`
//! works on both.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
