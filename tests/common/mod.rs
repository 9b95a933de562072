//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory database fixtures
//! - Application and account helpers
//! - Request helpers driving the router in-process
//! - Custom assertion macros

pub mod assertions;
pub mod database;
pub mod requests;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use requests::*;
