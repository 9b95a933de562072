/**
 * Authentication Handler Types
 *
 * Request and response bodies for the sign-up, add-admin and sign-in
 * handlers. Field names follow the JSON the web client already sends.
 *
 * Request fields are optional at the serde level so that an absent field
 * reaches validation and produces "All fields are required." instead of a
 * deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::authenticator::Registration;
use crate::shared::UserProfile;

/// Donor sign-up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignUpRequest {
    #[serde(rename = "donorName", default)]
    pub donor_name: Option<String>,
    #[serde(rename = "donorEmail", default)]
    pub donor_email: Option<String>,
    #[serde(rename = "donorPassword", default)]
    pub donor_password: Option<String>,
    #[serde(rename = "donorDOB", default)]
    pub donor_dob: Option<String>,
}

impl From<SignUpRequest> for Registration {
    fn from(request: SignUpRequest) -> Self {
        Registration {
            name: request.donor_name.unwrap_or_default(),
            email: request.donor_email.unwrap_or_default(),
            password: request.donor_password.unwrap_or_default(),
            date_of_birth: request.donor_dob.unwrap_or_default(),
        }
    }
}

/// Admin creation request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AddAdminRequest {
    #[serde(rename = "adminName", default)]
    pub admin_name: Option<String>,
    #[serde(rename = "adminEmail", default)]
    pub admin_email: Option<String>,
    #[serde(rename = "adminPassword", default)]
    pub admin_password: Option<String>,
    #[serde(rename = "adminDOB", default)]
    pub admin_dob: Option<String>,
}

impl From<AddAdminRequest> for Registration {
    fn from(request: AddAdminRequest) -> Self {
        Registration {
            name: request.admin_name.unwrap_or_default(),
            email: request.admin_email.unwrap_or_default(),
            password: request.admin_password.unwrap_or_default(),
            date_of_birth: request.admin_dob.unwrap_or_default(),
        }
    }
}

/// Sign-in request, shared by every role
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `{ success, message }` acknowledgement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Successful sign-in
///
/// Carries the public user view only. The stored credential has no field
/// here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignInResponse {
    pub success: bool,
    pub user: UserProfile,
    pub token: String,
}
