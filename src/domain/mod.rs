//! Domain layer: the travel entity and the storage contract.
//!
//! - [`entities`] - Core data structures and field validation rules
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on HTTP or database code.

pub mod entities;
pub mod repositories;
