//! Business logic services for the application layer.

pub mod travel_service;

pub use travel_service::TravelService;
