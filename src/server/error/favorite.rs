use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::favorite::FavoriteType, server::error::error_response};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("You must send information inside the body")]
    MissingBody,
    #[error("You must send the user id")]
    MissingUserId,
    #[error("The user id must be an integer")]
    InvalidUserId,
    #[error("User with id {0} has no favorites")]
    NoFavorites(i32),
    #[error("The {0} doesn't exist")]
    NotFavorited(FavoriteType),
    #[error("Unknown favorite type '{0}'")]
    UnknownFavoriteType(String),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("Favorite request rejected: {}", self);

        let status = match self {
            Self::UnknownFavoriteType(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
