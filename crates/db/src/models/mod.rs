//! Row models and create DTOs, one module per table.

pub mod course;
pub mod instructor;
pub mod registration;
pub mod skier;
