use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::catalog::Catalog, server::error::error_response};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{}", catalog.not_found_message(*id))]
    NotFound { catalog: Catalog, id: i32 },
}

/// Missing records are reported as 400 Bad Request rather than 404.
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { catalog, id } => {
                tracing::debug!(catalog = %catalog, id = %id, "{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
