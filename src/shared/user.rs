//! Public user view

use serde::{Deserialize, Serialize};

use crate::shared::Role;

/// User information that is safe to return to clients
///
/// Built from a stored record plus the role of the table it came from. The
/// stored credential has no field here and so can never be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Row identifier within the role's table
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}
