//! Holonet: a REST API over a Star Wars catalog with per-user favorites.

pub mod model;
pub mod server;
