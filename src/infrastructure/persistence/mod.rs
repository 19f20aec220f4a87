//! Travel repository implementations.
//!
//! - [`PgTravelRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryTravelRepository`] - Process-local storage for development and tests

pub mod memory_travel_repository;
pub mod pg_travel_repository;

pub use memory_travel_repository::MemoryTravelRepository;
pub use pg_travel_repository::PgTravelRepository;
