//! Repository for the `instructors` and `instructor_courses` tables.

use skistation_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::instructor::{CreateInstructor, Instructor};

const COLUMNS: &str = "id, first_name, last_name, date_of_hire";

/// Inserts for instructors and the courses they teach.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor, returning the created row.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateInstructor,
    ) -> Result<Instructor, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO instructors (first_name, last_name, date_of_hire)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_hire)
            .fetch_one(executor)
            .await
    }

    /// Record that an instructor teaches a course (idempotent).
    pub async fn add_course<'e, E>(
        executor: E,
        instructor_id: DbId,
        course_id: DbId,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO instructor_courses (instructor_id, course_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(instructor_id)
        .bind(course_id)
        .execute(executor)
        .await?;
        Ok(())
    }
}
