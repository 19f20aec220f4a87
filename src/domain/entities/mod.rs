//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs per use:
//! - [`Travel`] - A persisted record
//! - [`NewTravel`] - Field values for insert and full replacement (validated)
//! - [`TravelPatch`] - Partial updates

pub mod travel;

pub use travel::{MAX_FIELD_LENGTH, NewTravel, Travel, TravelPatch};
