//! BloodConnect - Main Library
//!
//! BloodConnect is the HTTP backend for a blood-donation coordination
//! application. It registers donors, authenticates the three user roles
//! (donor, medical staff, admin), lets admins create other admins, and serves
//! the onboarding questionnaire.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the wire and are shared with clients
//!   - `Role`, the public `UserProfile` view
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Credential store, authenticator and session tokens
//!   - Question listing
//!
//! # Usage
//!
//! ```rust,no_run
//! use bloodconnect::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Component errors (`StoreError`, `AuthError`, `ConfigError`) are converted
//!   into `backend::error::BackendError` at the HTTP boundary

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
