//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router creation, tracing and CORS layers
//! └── api_routes.rs  - Endpoint table
//! ```
//!
//! # Routes
//!
//! - `POST /sign-up` - Donor registration
//! - `POST /sign-in` - Sign-in
//! - `POST /add-admin` - Admin creation, behind `require_session`
//! - `GET /questions` - Onboarding questions

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::{cors_layer, create_router};
