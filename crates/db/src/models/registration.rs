//! Registration entity model and DTOs.

use serde::{Deserialize, Serialize};
use skistation_core::types::{DbId, WeekNumber};
use sqlx::FromRow;

/// A row from the `registrations` table.
///
/// `skier_id` and `course_id` start out empty and are attached by the
/// registration service.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub num_week: WeekNumber,
    pub skier_id: Option<DbId>,
    pub course_id: Option<DbId>,
}

/// Request payload for a new registration. References come from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegistration {
    pub num_week: WeekNumber,
}
