//! Admission rules for course registrations.
//!
//! The registration service asks two questions before writing a row:
//!
//! 1. May a skier of this age join a course of this type at all?
//!    ([`admission_policy`])
//! 2. If the course is capped, is there still a seat for that week?
//!    ([`check_capacity`])
//!
//! The split lets the caller skip the enrollment count entirely when the
//! skier is refused on age, or when the course has no cap.

use chrono::NaiveDate;

use crate::course::CourseType;
use crate::types::{DbId, WeekNumber};

/// Age (in whole years) from which a skier counts as an adult.
pub const ADULT_AGE: u32 = 16;

/// Seats per week in a collective course.
pub const COLLECTIVE_COURSE_CAPACITY: i64 = 6;

/// Why a registration was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationRejection {
    #[error("Skier {skier_id} is already registered for course {course_id} in week {num_week}")]
    AlreadyRegistered {
        num_week: WeekNumber,
        skier_id: DbId,
        course_id: DbId,
    },

    #[error("Skier aged {age} is not eligible for a {course_type} course")]
    Ineligible { course_type: CourseType, age: u32 },

    #[error("Course {course_id} is full for week {num_week} ({capacity} seats)")]
    CourseFull {
        course_id: DbId,
        num_week: WeekNumber,
        capacity: i64,
    },

    #[error("Course {course_id} has an unknown course type: {course_type}")]
    InvalidCourseType { course_id: DbId, course_type: String },
}

/// What a course requires once the skier passed the age rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// No seat limit.
    Unlimited,
    /// At most `capacity` registrations per week.
    Capped { capacity: i64 },
}

/// Whole years elapsed between `date_of_birth` and `today`.
///
/// A birthday falling on `today` counts as a completed year. A birth date in
/// the future yields `0`.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(date_of_birth).unwrap_or(0)
}

/// Apply the age rule for `course_type` and return the seat policy.
///
/// - `Individual`: always admitted, unlimited.
/// - `CollectiveChildren`: `age < 16`, capped.
/// - `CollectiveAdult`: `age >= 16`, capped.
/// - `Unrecognized`: refused with [`RegistrationRejection::InvalidCourseType`].
pub fn admission_policy(
    course_id: DbId,
    course_type: &CourseType,
    age: u32,
) -> Result<AdmissionPolicy, RegistrationRejection> {
    let capped = AdmissionPolicy::Capped {
        capacity: COLLECTIVE_COURSE_CAPACITY,
    };

    match course_type {
        CourseType::Individual => Ok(AdmissionPolicy::Unlimited),
        CourseType::CollectiveChildren if age < ADULT_AGE => Ok(capped),
        CourseType::CollectiveAdult if age >= ADULT_AGE => Ok(capped),
        CourseType::CollectiveChildren | CourseType::CollectiveAdult => {
            Err(RegistrationRejection::Ineligible {
                course_type: course_type.clone(),
                age,
            })
        }
        CourseType::Unrecognized(raw) => Err(RegistrationRejection::InvalidCourseType {
            course_id,
            course_type: raw.clone(),
        }),
    }
}

/// Check that one more registration fits.
///
/// `enrolled` is the number of registrations already stored for the course
/// and week, not counting the one being added.
pub fn check_capacity(
    course_id: DbId,
    num_week: WeekNumber,
    enrolled: i64,
    capacity: i64,
) -> Result<(), RegistrationRejection> {
    if enrolled < capacity {
        Ok(())
    } else {
        Err(RegistrationRejection::CourseFull {
            course_id,
            num_week,
            capacity,
        })
    }
}
