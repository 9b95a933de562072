/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "success": false, "message": "Email already exists." }
 * ```
 *
 * Server errors additionally carry `"error": true` and are logged with their
 * underlying cause.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = if self.is_server_error() {
            tracing::error!("{}: {}", message, self);
            json!({ "success": false, "error": true, "message": message })
        } else {
            json!({ "success": false, "message": message })
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::MalformedBody(rejection.body_text())
    }
}
