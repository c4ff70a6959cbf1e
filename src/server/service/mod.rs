//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories: they translate database
//! models into DTOs and apply the rules of the favorites feature.

pub mod catalog;
pub mod favorite;
