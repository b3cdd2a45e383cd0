use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// A known path hit with an unregistered verb gets a bare 405 from the
/// router; rewrite it into the standard error envelope.
pub async fn rewrite_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return Error::MethodNotAllowed.into_response();
    }
    response
}

/// Router fallback for unknown paths.
pub async fn not_found() -> Error {
    Error::NotFound("no route for the requested path".to_string())
}
