/**
 * Sign-in Handler
 *
 * POST /sign-in authenticates a donor, medical-staff or admin account.
 *
 * # Authentication Process
 *
 * 1. Resolve the email through donor, medical staff, then admin tables
 * 2. Verify the password against the first matching row only
 * 3. Issue a session token carrying the resolved role
 *
 * # Security
 *
 * - A wrong password, an unknown email and a blank field all answer 200
 *   `{ success: false, message: "Invalid email or password." }`
 * - The stored credential is never part of the response
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::{SignInRequest, SignInResponse};
use crate::backend::error::BackendError;

/// Sign-in handler
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "user": { "id": 1, "name": "Alice", "email": "a@x.com", "role": "donor" },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn sign_in(
    State(authenticator): State<Arc<Authenticator>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResponse>, BackendError> {
    let Json(request) = payload?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let outcome = authenticator.login(&email, &password).await?;

    Ok(Json(SignInResponse {
        success: true,
        user: outcome.user,
        token: outcome.token,
    }))
}
