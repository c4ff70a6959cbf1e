//! Data transfer objects shared by the HTTP layer and its consumers.

pub mod api;
pub mod catalog;
pub mod favorite;
