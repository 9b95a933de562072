/**
 * Sign-up Handler
 *
 * POST /sign-up registers a donor account.
 *
 * # Registration Process
 *
 * 1. Parse the JSON body (malformed body: 400)
 * 2. Validate that all four fields are present (400 "All fields are required.")
 * 3. Reject an email already in the donor table (400 "Email already exists.")
 * 4. Hash the password and insert the row
 *
 * Responds 201 `{ success: true, message: "User registered successfully." }`.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::{MessageResponse, SignUpRequest};
use crate::backend::error::BackendError;
use crate::shared::Role;

/// Donor sign-up handler
///
/// # Example Request
///
/// ```http
/// POST /sign-up HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "donorName": "Alice",
///   "donorEmail": "a@x.com",
///   "donorPassword": "pw123",
///   "donorDOB": "2000-01-01"
/// }
/// ```
pub async fn sign_up(
    State(authenticator): State<Arc<Authenticator>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Donor sign-up request");

    let id = authenticator.register(Role::Donor, request.into()).await?;
    tracing::info!("Donor {} registered", id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("User registered successfully.")),
    ))
}
