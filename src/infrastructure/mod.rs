//! Infrastructure layer implementing the domain storage contract.
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod persistence;
