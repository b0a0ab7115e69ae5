//! Repository for the `registrations` table.

use skistation_core::course::Support;
use skistation_core::types::{DbId, WeekNumber};
use sqlx::PgExecutor;

use crate::models::registration::Registration;

const COLUMNS: &str = "id, num_week, skier_id, course_id";

/// Lookups, inserts and counting queries for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a registration with optional skier and course references.
    pub async fn create<'e, E>(
        executor: E,
        num_week: WeekNumber,
        skier_id: Option<DbId>,
        course_id: Option<DbId>,
    ) -> Result<Registration, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO registrations (num_week, skier_id, course_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(num_week)
            .bind(skier_id)
            .bind(course_id)
            .fetch_one(executor)
            .await
    }

    /// Find a registration by ID.
    pub async fn find_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Registration>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Attach a course to an existing registration.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_course<'e, E>(
        executor: E,
        id: DbId,
        course_id: DbId,
    ) -> Result<Option<Registration>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE registrations SET course_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(course_id)
            .fetch_optional(executor)
            .await
    }

    /// Count registrations for the exact (week, skier, course) triple.
    pub async fn count_by_week_skier_and_course<'e, E>(
        executor: E,
        num_week: WeekNumber,
        skier_id: DbId,
        course_id: DbId,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM registrations \
             WHERE num_week = $1 AND skier_id = $2 AND course_id = $3",
        )
        .bind(num_week)
        .bind(skier_id)
        .bind(course_id)
        .fetch_one(executor)
        .await
    }

    /// Count registrations already holding a seat in a course for a week.
    pub async fn count_by_course_and_week<'e, E>(
        executor: E,
        course_id: DbId,
        num_week: WeekNumber,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM registrations WHERE course_id = $1 AND num_week = $2",
        )
        .bind(course_id)
        .bind(num_week)
        .fetch_one(executor)
        .await
    }

    /// Distinct week numbers, ascending, in which `instructor_id` taught a
    /// course on the given `support`.
    pub async fn num_weeks_by_instructor_and_support<'e, E>(
        executor: E,
        instructor_id: DbId,
        support: Support,
    ) -> Result<Vec<WeekNumber>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, WeekNumber>(
            "SELECT DISTINCT r.num_week \
             FROM registrations r \
             JOIN courses c ON c.id = r.course_id \
             JOIN instructor_courses ic ON ic.course_id = c.id \
             WHERE ic.instructor_id = $1 AND c.support = $2 \
             ORDER BY r.num_week ASC",
        )
        .bind(instructor_id)
        .bind(support.as_str())
        .fetch_all(executor)
        .await
    }
}
