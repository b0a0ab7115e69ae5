//! Course entity model and DTOs.

use serde::{Deserialize, Serialize};
use skistation_core::course::{CourseType, Support};
use skistation_core::types::DbId;
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub level: i32,
    /// Decoded leniently: unknown values become `CourseType::Unrecognized`.
    #[sqlx(try_from = "String")]
    pub type_course: CourseType,
    #[sqlx(try_from = "String")]
    pub support: Support,
    pub price: f64,
    pub time_slot: i32,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub level: i32,
    pub type_course: CourseType,
    pub support: Support,
    pub price: f64,
    pub time_slot: i32,
}
