//! Handlers for `/registration`.

use axum::extract::{Path, State};
use axum::Json;
use skistation_core::course::Support;
use skistation_core::types::{DbId, WeekNumber};
use skistation_db::models::registration::{CreateRegistration, Registration};

use crate::error::AppResult;
use crate::services::RegistrationService;
use crate::state::AppState;

/// PUT /registration/addAndAssignToSkier/{num_skieur}
pub async fn add_and_assign_to_skier(
    State(state): State<AppState>,
    Path(skier_id): Path<DbId>,
    Json(input): Json<CreateRegistration>,
) -> AppResult<Json<Registration>> {
    let registration =
        RegistrationService::add_registration_and_assign_to_skier(&state.pool, &input, skier_id)
            .await?;
    Ok(Json(registration))
}

/// PUT /registration/assignToCourse/{num_regis}/{num_course}
pub async fn assign_to_course(
    State(state): State<AppState>,
    Path((registration_id, course_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Registration>> {
    let registration =
        RegistrationService::assign_registration_to_course(&state.pool, registration_id, course_id)
            .await?;
    Ok(Json(registration))
}

/// PUT /registration/addAndAssignToSkierAndCourse/{num_skieur}/{num_course}
///
/// Ages are computed against the current UTC date.
pub async fn add_and_assign_to_skier_and_course(
    State(state): State<AppState>,
    Path((skier_id, course_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateRegistration>,
) -> AppResult<Json<Registration>> {
    let today = chrono::Utc::now().date_naive();
    let registration = RegistrationService::add_registration_and_assign_to_skier_and_course(
        &state.pool,
        &input,
        skier_id,
        course_id,
        today,
    )
    .await?;
    Ok(Json(registration))
}

/// GET /registration/numWeeks/{num_instructor}/{support}
pub async fn num_weeks_course_of_instructor_by_support(
    State(state): State<AppState>,
    Path((instructor_id, support)): Path<(DbId, Support)>,
) -> AppResult<Json<Vec<WeekNumber>>> {
    let weeks = RegistrationService::num_weeks_course_of_instructor_by_support(
        &state.pool,
        instructor_id,
        support,
    )
    .await?;
    Ok(Json(weeks))
}

/// GET /registration/{num_regis}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(registration_id): Path<DbId>,
) -> AppResult<Json<Registration>> {
    let registration = RegistrationService::get_registration(&state.pool, registration_id).await?;
    Ok(Json(registration))
}
