//! Test utilities for the Holonet server.
//!
//! Tests are built in two phases: a [`TestBuilder`] declares the tables & fixture rows a
//! test needs, then `build()` returns a [`TestContext`] backed by a fresh in-memory SQLite
//! database where further fixtures can be inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
