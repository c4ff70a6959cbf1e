//! Server application models.

pub mod app;
