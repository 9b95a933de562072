//! Authentication Handlers Module
//!
//! HTTP handlers for account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── signup.rs     - Donor registration handler
//! ├── login.rs      - Sign-in handler
//! └── add_admin.rs  - Admin creation handler
//! ```
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /sign-up - Donor registration
//! - **`sign_in`** - POST /sign-in - Authentication for every role
//! - **`add_admin`** - POST /add-admin - Admin creation (admin token required)

/// Request and response types
pub mod types;

/// Sign-up handler
pub mod signup;

/// Sign-in handler
pub mod login;

/// Add-admin handler
pub mod add_admin;

pub use types::{AddAdminRequest, MessageResponse, SignInRequest, SignInResponse, SignUpRequest};

pub use add_admin::add_admin;
pub use login::sign_in;
pub use signup::sign_up;
