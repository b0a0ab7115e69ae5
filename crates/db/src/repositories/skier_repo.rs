//! Repository for the `skiers` table.

use skistation_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::skier::{CreateSkier, Skier};

const COLUMNS: &str = "id, first_name, last_name, date_of_birth, city";

/// Lookups and inserts for skiers.
pub struct SkierRepo;

impl SkierRepo {
    /// Insert a new skier, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateSkier) -> Result<Skier, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO skiers (first_name, last_name, date_of_birth, city)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skier>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.city)
            .fetch_one(executor)
            .await
    }

    /// Find a skier by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Skier>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM skiers WHERE id = $1");
        sqlx::query_as::<_, Skier>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
