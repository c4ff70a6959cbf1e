//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind typed methods. The read-only catalog tables
//! share a single generic repository, favorites have their own.

pub mod catalog;
pub mod favorite;
