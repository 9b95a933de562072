//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer-token gate for privileged routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use bloodconnect::backend::middleware::require_session;
//!
//! let protected = Router::new()
//!     .route("/add-admin", post(add_admin))
//!     .route_layer(from_fn_with_state(state.clone(), require_session));
//! ```

pub mod auth;

pub use auth::{authorize, bearer_token, require_session, AuthUser};
