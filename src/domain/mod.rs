//! Domain layer: entities and repository contracts.
//!
//! Nothing here knows about SQLite or HTTP. Repository traits are implemented
//! in [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].
//!
//! - [`entities`] - Plain data structures
//! - [`repositories`] - Narrow storage capabilities, one per aggregate

pub mod entities;
pub mod repositories;
