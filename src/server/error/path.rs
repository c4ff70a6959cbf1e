use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::server::error::{error_response, InternalServerError};

pub static NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server";

/// Route parameters that fail to parse are treated as a route that does not exist.
pub(super) fn path_rejection_response(rejection: PathRejection) -> Response {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            tracing::debug!("Rejected route parameters: {}", err.body_text());

            error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
        }
        rejection => InternalServerError(rejection).into_response(),
    }
}
