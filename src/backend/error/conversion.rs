/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses, and JSON extractor
 * rejections into backend errors.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 422
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            BackendError::Store(err) => tracing::error!(error = %err, "store failure while handling request"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "request rejected"),
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Any body that is not a JSON object of the expected shape is a
/// validation failure (422), whatever axum's own rejection status would be.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::invalid("body", rejection.body_text())
    }
}

/// A query string that does not decode (for example a repeated `limit`)
/// is reported like any other bad `limit`.
impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        BackendError::invalid("limit", rejection.body_text())
    }
}
