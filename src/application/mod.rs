//! Application layer services.
//!
//! Services validate input and coordinate repository calls. They consume the
//! repository traits from [`crate::domain::repositories`], so the same service
//! runs over PostgreSQL, the in-memory store, or a mock.
//!
//! - [`services::travel_service::TravelService`] - Travel CRUD operations

pub mod services;
