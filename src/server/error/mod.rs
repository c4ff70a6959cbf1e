//! Error types for the Holonet server.
//!
//! Each domain has its own `thiserror` enum which knows how to render itself as an HTTP
//! response. They are aggregated into [`Error`], the error type returned by services and
//! controllers, so that the `?` operator converts them automatically.
//!
//! Every error response carries an [`ErrorDto`] body, `{"error": ..., "status_code": ...}`,
//! with the same status code as the response itself.

pub mod catalog;
pub mod config;
pub mod favorite;
pub mod path;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError, favorite::FavoriteError},
};

/// Main error type for the Holonet server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Lookup of a catalog record that does not exist.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Invalid favorite request or missing favorite.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Route parameters that do not parse, e.g. a non-numeric ID.
    #[error(transparent)]
    PathRejection(#[from] axum::extract::rejection::PathRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps domain errors to their own responses, anything else becomes a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::PathRejection(rejection) => path::path_rejection_response(rejection),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response whose body repeats the status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
            status_code: status.as_u16(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
