//! Account roles
//!
//! A role is never stored on a user record. It is attached from the table that
//! produced a match, and it travels inside session claims.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of account a credential belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Donor,
    MedicalStaff,
    Admin,
}

impl Role {
    /// Every role, in sign-in resolution order
    ///
    /// The first table holding a matching email fixes the role; later tables
    /// are never consulted.
    pub const LOGIN_ORDER: [Role; 3] = [Role::Donor, Role::MedicalStaff, Role::Admin];

    /// Wire name, as it appears in JSON payloads and token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::MedicalStaff => "medical-staff",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Role::Donor),
            "medical-staff" => Ok(Role::MedicalStaff),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("{:?} is not a valid role", s)),
        }
    }
}
