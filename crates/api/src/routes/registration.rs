//! Route definitions for registrations.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Registration routes mounted at `/registration`.
///
/// ```text
/// PUT /addAndAssignToSkier/{num_skieur}                        -> add_and_assign_to_skier
/// PUT /assignToCourse/{num_regis}/{num_course}                 -> assign_to_course
/// PUT /addAndAssignToSkierAndCourse/{num_skieur}/{num_course}  -> add_and_assign_to_skier_and_course
/// GET /numWeeks/{num_instructor}/{support}                     -> num_weeks_course_of_instructor_by_support
/// GET /{num_regis}                                             -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/addAndAssignToSkier/{num_skieur}",
            put(registration::add_and_assign_to_skier),
        )
        .route(
            "/assignToCourse/{num_regis}/{num_course}",
            put(registration::assign_to_course),
        )
        .route(
            "/addAndAssignToSkierAndCourse/{num_skieur}/{num_course}",
            put(registration::add_and_assign_to_skier_and_course),
        )
        .route(
            "/numWeeks/{num_instructor}/{support}",
            get(registration::num_weeks_course_of_instructor_by_support),
        )
        .route("/{num_regis}", get(registration::get_by_id))
}
