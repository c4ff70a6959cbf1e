//! Server application core modules.
//!
//! This module contains the HTTP side of Holonet: configuration, startup, routing,
//! controllers, services and the repositories over the sea-orm entities.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
