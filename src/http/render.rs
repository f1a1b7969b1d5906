//! JSON response rendering shared by all handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Renders `data` as a JSON response with the given status.
///
/// A body that fails to encode is logged and the response goes out with
/// the intended status and an empty body; by then the status has been
/// decided and there is nothing useful to tell the client.
pub fn ok<T: Serialize>(data: &T, status: StatusCode) -> Response {
    let body = match serde_json::to_vec(data) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!("failed to encode response body: {err}");
            Vec::new()
        }
    };
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Renders an error as `{"error": <message>}` with the given status.
pub fn error(message: impl ToString, status: StatusCode) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
    };
    ok(&body, status)
}
