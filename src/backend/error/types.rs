/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and
 * middleware. Each variant knows its status code and the fixed message a
 * client sees; underlying store, hashing and token errors stay server-side.
 *
 * # Status Code Mapping
 *
 * - Missing fields, duplicate email, malformed body: 400
 * - Invalid credentials: 200 with `success: false`
 * - No bearer token, non-admin caller: 403
 * - Bad or expired token: 401
 * - Store, hashing, verification, signing failures: 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::authenticator::AuthError;
use crate::backend::auth::store::StoreError;
use crate::shared::Role;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No bearer token on a protected route
    #[error("no token provided")]
    MissingToken,

    /// Token failed signature or expiry checks
    #[error("invalid or expired token")]
    InvalidToken,

    /// Authenticated, but the role may not perform the operation
    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    /// Request body was not the expected JSON
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("failed to fetch questions: {0}")]
    Questions(#[source] StoreError),
}

impl BackendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::MissingFields | AuthError::DuplicateEmail => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::OK,
                AuthError::DuplicateCheck(_)
                | AuthError::Lookup(_)
                | AuthError::Persist { .. }
                | AuthError::Hashing(_)
                | AuthError::Verification(_)
                | AuthError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MissingToken | Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Questions(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Auth(err) => match err {
                AuthError::MissingFields => "All fields are required.",
                AuthError::DuplicateEmail => "Email already exists.",
                AuthError::InvalidCredentials => "Invalid email or password.",
                AuthError::DuplicateCheck(_) => "Server error.",
                AuthError::Lookup(_) => "Error querying database.",
                AuthError::Persist { role: Role::Admin, .. } => "Error saving admin to database.",
                AuthError::Persist { .. } => "Error saving user to database.",
                AuthError::Hashing(_) => "Error encrypting password.",
                AuthError::Verification(_) | AuthError::Session(_) => "Server error.",
            },
            Self::MissingToken => "No token provided.",
            Self::InvalidToken => "Invalid or expired token.",
            Self::Forbidden(message) => *message,
            Self::MalformedBody(_) => "Invalid request body.",
            Self::Questions(_) => "Error fetching questions.",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
