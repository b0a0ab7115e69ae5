//! Instructor entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skistation_core::types::DbId;
use sqlx::FromRow;

/// A row from the `instructors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Instructor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_hire: NaiveDate,
}

/// DTO for creating a new instructor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstructor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_hire: NaiveDate,
}
