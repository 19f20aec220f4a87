//! In-process travel repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewTravel, Travel};
use crate::domain::repositories::TravelRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    records: BTreeMap<i64, Travel>,
    last_id: i64,
}

/// Travel repository backed by an ordered map.
///
/// Ids increase monotonically and `last_id` never rewinds, so deleted ids are
/// not handed out again. Ascending-id iteration doubles as insertion order.
/// Contents are lost when the process exits.
pub struct MemoryTravelRepository {
    inner: RwLock<Inner>,
}

impl MemoryTravelRepository {
    pub fn new() -> Self {
        debug!("Using in-memory travel storage");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryTravelRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TravelRepository for MemoryTravelRepository {
    async fn insert(&self, new_travel: NewTravel) -> Result<Travel, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let travel = Travel::new(inner.last_id, new_travel.destination, new_travel.details);
        inner.records.insert(travel.id, travel.clone());

        Ok(travel)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Travel>, AppError> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn replace(&self, id: i64, fields: NewTravel) -> Result<Travel, AppError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| AppError::travel_not_found(id))?;

        record.destination = fields.destination;
        record.details = fields.details;

        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::travel_not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
