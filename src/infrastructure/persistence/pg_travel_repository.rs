//! PostgreSQL implementation of the travel repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTravel, Travel};
use crate::domain::repositories::TravelRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TravelRow {
    id: i64,
    destination: String,
    details: String,
}

impl From<TravelRow> for Travel {
    fn from(row: TravelRow) -> Self {
        Travel::new(row.id, row.destination, row.details)
    }
}

/// PostgreSQL repository for travel records.
///
/// Ids come from a `BIGSERIAL` sequence, so they are never reused after a
/// delete. Each method is a single statement.
pub struct PgTravelRepository {
    pool: Arc<PgPool>,
}

impl PgTravelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TravelRepository for PgTravelRepository {
    async fn insert(&self, new_travel: NewTravel) -> Result<Travel, AppError> {
        let row = sqlx::query_as::<_, TravelRow>(
            r#"
            INSERT INTO travels (destination, details)
            VALUES ($1, $2)
            RETURNING id, destination, details
            "#,
        )
        .bind(new_travel.destination)
        .bind(new_travel.details)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Travel>, AppError> {
        let row = sqlx::query_as::<_, TravelRow>(
            r#"
            SELECT id, destination, details
            FROM travels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Travel::from))
    }

    async fn list(&self) -> Result<Vec<Travel>, AppError> {
        let rows = sqlx::query_as::<_, TravelRow>(
            r#"
            SELECT id, destination, details
            FROM travels
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Travel::from).collect())
    }

    async fn replace(&self, id: i64, fields: NewTravel) -> Result<Travel, AppError> {
        let row = sqlx::query_as::<_, TravelRow>(
            r#"
            UPDATE travels SET
                destination = $2,
                details     = $3
            WHERE id = $1
            RETURNING id, destination, details
            "#,
        )
        .bind(id)
        .bind(fields.destination)
        .bind(fields.details)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Travel::from)
            .ok_or_else(|| AppError::travel_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM travels WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::travel_not_found(id));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
