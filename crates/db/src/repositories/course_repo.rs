//! Repository for the `courses` table.

use skistation_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::course::{Course, CreateCourse};

const COLUMNS: &str = "id, level, type_course, support, price, time_slot";

/// Lookups and inserts for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateCourse) -> Result<Course, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO courses (level, type_course, support, price, time_slot)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.level)
            .bind(input.type_course.as_str())
            .bind(input.support.as_str())
            .bind(input.price)
            .bind(input.time_slot)
            .fetch_one(executor)
            .await
    }

    /// Find a course by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Course>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a course by ID and lock its row until the transaction ends.
    ///
    /// Registrations against the same course serialize on this lock, so the
    /// duplicate and capacity checks that follow see every committed seat.
    /// Only meaningful inside a transaction.
    pub async fn find_by_id_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Course>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
