/**
 * Authentication Middleware
 *
 * Guards privileged routes. The bearer token is the second single-space
 * separated part of the `Authorization` header; it is verified
 * and the decoded `SessionClaims` are attached to the request extensions for
 * handlers to pick up through `AuthUser`.
 *
 * - No header, or an empty second part: 403 "No token provided."
 * - Bad signature or expired: 401 "Invalid or expired token."
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::backend::auth::sessions::{SessionClaims, SessionManager};
use crate::backend::error::BackendError;

/// Token part of the `Authorization` header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
}

/// Verify the request's bearer token
pub fn authorize(headers: &HeaderMap, sessions: &SessionManager) -> Result<SessionClaims, BackendError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing bearer token");
        BackendError::MissingToken
    })?;

    sessions.verify(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        BackendError::InvalidToken
    })
}

/// Session middleware
///
/// Attaches `SessionClaims` to the request, or short-circuits with the gate
/// error.
pub async fn require_session(
    State(sessions): State<Arc<SessionManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let claims = authorize(request.headers(), &sessions)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Axum extractor for the claims `require_session` attached
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("SessionClaims not found in request extensions");
                BackendError::MissingToken
            })?;

        Ok(AuthUser(claims))
    }
}
