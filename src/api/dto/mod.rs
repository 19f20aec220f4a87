//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; [`travel`] is the mapping
//! between stored records and their wire form.

pub mod health;
pub mod root;
pub mod travel;
