//! Skier entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skistation_core::types::DbId;
use sqlx::FromRow;

/// A row from the `skiers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Skier {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
}

/// DTO for creating a new skier.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkier {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub city: Option<String>,
}
