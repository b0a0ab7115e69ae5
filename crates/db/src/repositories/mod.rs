//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query functions.
//! Functions take any [`sqlx::PgExecutor`] as the first argument, so callers
//! pass `&PgPool` for standalone queries or `&mut *tx` to run inside a
//! transaction.

pub mod course_repo;
pub mod instructor_repo;
pub mod registration_repo;
pub mod skier_repo;

pub use course_repo::CourseRepo;
pub use instructor_repo::InstructorRepo;
pub use registration_repo::RegistrationRepo;
pub use skier_repo::SkierRepo;
