/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Week numbers are plain integers, matching the `INTEGER` column.
pub type WeekNumber = i32;
