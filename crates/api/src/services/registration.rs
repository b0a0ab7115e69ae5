//! Registration workflow: attach skiers and courses to registrations.
//!
//! Every operation returns [`AppResult`]; a refusal is one of
//! `CoreError::NotFound` or a [`RegistrationRejection`], never an empty
//! value. Nothing is written when an operation fails.

use chrono::NaiveDate;
use skistation_core::course::Support;
use skistation_core::error::CoreError;
use skistation_core::registration::{
    admission_policy, age_in_years, check_capacity, AdmissionPolicy, RegistrationRejection,
};
use skistation_core::types::{DbId, WeekNumber};
use skistation_db::models::registration::{CreateRegistration, Registration};
use skistation_db::repositories::{CourseRepo, RegistrationRepo, SkierRepo};
use skistation_db::DbPool;

use crate::error::{AppError, AppResult};

/// Orchestrates the skier, course and registration repositories.
pub struct RegistrationService;

impl RegistrationService {
    /// Create a registration for an existing skier.
    pub async fn add_registration_and_assign_to_skier(
        pool: &DbPool,
        input: &CreateRegistration,
        skier_id: DbId,
    ) -> AppResult<Registration> {
        tracing::info!(skier_id, num_week = input.num_week, "Adding registration for skier");

        let skier = SkierRepo::find_by_id(pool, skier_id)
            .await?
            .ok_or_else(|| not_found("Skier", skier_id))?;

        let registration =
            RegistrationRepo::create(pool, input.num_week, Some(skier.id), None).await?;

        tracing::info!(
            registration_id = registration.id,
            skier_id,
            "Registration saved for skier",
        );
        Ok(registration)
    }

    /// Attach an existing course to an existing registration.
    pub async fn assign_registration_to_course(
        pool: &DbPool,
        registration_id: DbId,
        course_id: DbId,
    ) -> AppResult<Registration> {
        tracing::info!(registration_id, course_id, "Assigning registration to course");

        let registration = RegistrationRepo::find_by_id(pool, registration_id).await?;
        let course = CourseRepo::find_by_id(pool, course_id).await?;

        let registration = registration.ok_or_else(|| not_found("Registration", registration_id))?;
        let course = course.ok_or_else(|| not_found("Course", course_id))?;

        let updated = RegistrationRepo::set_course(pool, registration.id, course.id)
            .await?
            .ok_or_else(|| not_found("Registration", registration_id))?;

        tracing::info!(registration_id, course_id, "Registration assigned to course");
        Ok(updated)
    }

    /// Create a registration for a skier in a course, applying the admission
    /// rules.
    ///
    /// Runs in one transaction. The course row is locked first so concurrent
    /// registrations for the same course see each other's seats; the
    /// `uq_registrations_week_skier_course` constraint backs the duplicate
    /// check. `today` is the date the skier's age is computed at.
    pub async fn add_registration_and_assign_to_skier_and_course(
        pool: &DbPool,
        input: &CreateRegistration,
        skier_id: DbId,
        course_id: DbId,
        today: NaiveDate,
    ) -> AppResult<Registration> {
        let num_week = input.num_week;
        tracing::info!(
            skier_id,
            course_id,
            num_week,
            "Adding registration for skier and course",
        );

        let mut tx = pool.begin().await?;

        let skier = SkierRepo::find_by_id(&mut *tx, skier_id)
            .await?
            .ok_or_else(|| not_found("Skier", skier_id))?;
        let course = CourseRepo::find_by_id_for_update(&mut *tx, course_id)
            .await?
            .ok_or_else(|| not_found("Course", course_id))?;

        let existing = RegistrationRepo::count_by_week_skier_and_course(
            &mut *tx, num_week, skier.id, course.id,
        )
        .await?;
        if existing >= 1 {
            return Err(reject(RegistrationRejection::AlreadyRegistered {
                num_week,
                skier_id,
                course_id,
            }));
        }

        let age = age_in_years(skier.date_of_birth, today);
        tracing::debug!(skier_id, age, course_type = %course.type_course, "Checking admission");

        match admission_policy(course.id, &course.type_course, age).map_err(reject)? {
            AdmissionPolicy::Unlimited => {}
            AdmissionPolicy::Capped { capacity } => {
                let enrolled =
                    RegistrationRepo::count_by_course_and_week(&mut *tx, course.id, num_week)
                        .await?;
                check_capacity(course.id, num_week, enrolled, capacity).map_err(reject)?;
                tracing::debug!(course_id, num_week, enrolled, capacity, "Seat available");
            }
        }

        let registration =
            RegistrationRepo::create(&mut *tx, num_week, Some(skier.id), Some(course.id)).await?;
        tx.commit().await?;

        tracing::info!(
            registration_id = registration.id,
            skier_id,
            course_id,
            num_week,
            "Registration saved for skier and course",
        );
        Ok(registration)
    }

    /// Distinct weeks, ascending, in which an instructor taught on `support`.
    pub async fn num_weeks_course_of_instructor_by_support(
        pool: &DbPool,
        instructor_id: DbId,
        support: Support,
    ) -> AppResult<Vec<WeekNumber>> {
        tracing::info!(instructor_id, %support, "Fetching instructor weeks");

        let weeks =
            RegistrationRepo::num_weeks_by_instructor_and_support(pool, instructor_id, support)
                .await?;

        tracing::debug!(instructor_id, ?weeks, "Instructor weeks found");
        Ok(weeks)
    }

    /// Load a single registration.
    pub async fn get_registration(pool: &DbPool, registration_id: DbId) -> AppResult<Registration> {
        RegistrationRepo::find_by_id(pool, registration_id)
            .await?
            .ok_or_else(|| not_found("Registration", registration_id))
    }
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    tracing::warn!(entity, id, "Entity not found");
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Log a business-rule refusal and lift it into an [`AppError`].
fn reject(rejection: RegistrationRejection) -> AppError {
    tracing::warn!(reason = %rejection, "Registration rejected");
    rejection.into()
}
