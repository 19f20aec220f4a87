//! Repository trait for travel records.

use crate::domain::entities::{NewTravel, Travel};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for travel records.
///
/// Every method is a single unit of work against the store. Implementations
/// provide at least per-record atomicity and never reuse an `id` after deletion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTravelRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryTravelRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Inserts a new record and returns it with its assigned `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_travel: NewTravel) -> Result<Travel, AppError>;

    /// Finds a record by its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError>;

    /// Lists all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Travel>, AppError>;

    /// Replaces both mutable fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn replace(&self, id: i64, fields: NewTravel) -> Result<Travel, AppError>;

    /// Permanently removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
