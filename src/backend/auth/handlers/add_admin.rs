/**
 * Add-admin Handler
 *
 * POST /add-admin lets an authenticated admin create another admin account.
 * The route sits behind `require_session`, so a missing or invalid token has
 * already been answered by the time this handler runs.
 *
 * Checks run in this order:
 * 1. Caller's role is admin (403 otherwise)
 * 2. Body parses and all four fields are present (400)
 * 3. Email not yet in the admin table (400)
 * 4. Password hashed and row inserted (500 on failure)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::{AddAdminRequest, MessageResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::Role;

pub async fn add_admin(
    State(authenticator): State<Arc<Authenticator>>,
    AuthUser(claims): AuthUser,
    payload: Result<Json<AddAdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    if claims.role != Role::Admin {
        tracing::warn!("{} account {} attempted to add an admin", claims.role, claims.id);
        return Err(BackendError::Forbidden(
            "Unauthorized: Only admins can add new admins.",
        ));
    }

    let Json(request) = payload?;
    let id = authenticator.register(Role::Admin, request.into()).await?;
    tracing::info!("Admin {} created admin {}", claims.id, id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("New admin added successfully.")),
    ))
}
