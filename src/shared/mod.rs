//! Shared Types Module
//!
//! Types that appear in request and response payloads and that clients of the
//! API can rely on.
//!
//! - `role` - The three account roles and their wire names
//! - `user` - The public view of an authenticated account

pub mod role;
pub mod user;

pub use role::Role;
pub use user::UserProfile;
