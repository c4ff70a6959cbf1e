//! Path extractors rendering failures through [`Error`].

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::server::error::Error;

/// Route parameters, rejected with the JSON error body when they fail to parse
///
/// Wraps axum's [`Path`], whose own rejection is a plain text response.
#[derive(Clone, Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}

/// ID of a record taken from the route
///
/// Only non-negative integers in the `i32` range are accepted, anything else does not
/// match the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i32);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u32::deserialize(deserializer)?;

        i32::try_from(id)
            .map(RecordId)
            .map_err(serde::de::Error::custom)
    }
}
