//! HTTP controller endpoints for the Holonet web API.
//!
//! Controllers extract path parameters & request bodies, call into the service layer and
//! shape the JSON responses. Every handler is annotated with utoipa for the OpenAPI
//! document served at `/api/docs`.

pub mod catalog;
pub mod extract;
pub mod favorite;
