//! Server Module
//!
//! Server setup: configuration, application state and initialization.
//!
//! - **`config`** - `ServerConfig` from the environment, SQLite pool setup
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - `create_app` and `build_state`

pub mod config;
pub mod init;
pub mod state;

pub use config::{ConfigError, CorsOrigin, ServerConfig};
pub use init::{build_state, create_app, InitError};
pub use state::AppState;
