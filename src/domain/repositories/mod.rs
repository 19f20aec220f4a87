//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod travel_repository;

pub use travel_repository::TravelRepository;

#[cfg(test)]
pub use travel_repository::MockTravelRepository;
