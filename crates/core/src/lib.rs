//! Domain types and business rules for the ski station backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The persistence
//! layer (`skistation_db`) and the API server (`skistation_api`) build on
//! these types.

pub mod course;
pub mod error;
pub mod registration;
pub mod types;
