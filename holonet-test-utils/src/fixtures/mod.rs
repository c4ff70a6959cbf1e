//! Test fixture modules for database row creation.
//!
//! - `factory` - Active models populated with standard test data
//! - `catalog` - Users, planets, characters & vehicles
//! - `favorite` - Favorites linking a user to a catalog record

pub mod catalog;
pub mod factory;
pub mod favorite;
