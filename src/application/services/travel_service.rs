//! Travel resource operations.

use crate::domain::entities::{NewTravel, Travel, TravelPatch};
use crate::domain::repositories::TravelRepository;
use crate::error::AppError;
use std::sync::Arc;
use validator::Validate;

/// Service exposing CRUD operations over a travel repository.
///
/// Field values are validated here before anything reaches the store, so the
/// HTTP handlers and the admin CLI share the same rules. Missing records are
/// reported before invalid payloads.
pub struct TravelService<R: TravelRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TravelRepository + ?Sized> TravelService<R> {
    /// Creates a new travel service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every travel record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self) -> Result<Vec<Travel>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a travel record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn retrieve(&self, id: i64) -> Result<Travel, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::travel_not_found(id))
    }

    /// Validates and stores a new travel record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is blank or too long.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, new_travel: NewTravel) -> Result<Travel, AppError> {
        new_travel.validate()?;

        let travel = self.repository.insert(new_travel).await?;
        tracing::info!(id = travel.id, destination = %travel.destination, "Travel created");

        Ok(travel)
    }

    /// Replaces both fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Validation`] if a field is blank or too long.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn replace(&self, id: i64, fields: NewTravel) -> Result<Travel, AppError> {
        self.retrieve(id).await?;
        fields.validate()?;

        let travel = self.repository.replace(id, fields).await?;
        tracing::info!(id, "Travel replaced");

        Ok(travel)
    }

    /// Updates only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Validation`] if a provided field is blank or too long.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn partial_update(&self, id: i64, patch: TravelPatch) -> Result<Travel, AppError> {
        let current = self.retrieve(id).await?;

        let merged = current.merge(patch);
        merged.validate()?;

        let travel = self.repository.replace(id, merged).await?;
        tracing::info!(id, "Travel updated");

        Ok(travel)
    }

    /// Permanently deletes a travel record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn destroy(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Travel deleted");
        Ok(())
    }

    /// Checks that the underlying store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
