pub mod health;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /registration/addAndAssignToSkier/{num_skieur}                           PUT
/// /registration/assignToCourse/{num_regis}/{num_course}                    PUT
/// /registration/addAndAssignToSkierAndCourse/{num_skieur}/{num_course}     PUT
/// /registration/numWeeks/{num_instructor}/{support}                        GET
/// /registration/{num_regis}                                                GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/registration", registration::router())
}
