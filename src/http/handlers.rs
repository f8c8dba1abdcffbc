//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic. Allocation is a
//! microsecond-scale pure computation, so handlers call the core
//! directly instead of offloading to a blocking pool.

use axum::{extract::State, Json};

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::api::{PlanRequest, StudyPlan};
use crate::config::WeightProfile;
use crate::services::{build_study_plan, validate_plan_request};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

/// POST /v1/plans
///
/// Compute a study plan from the posted request. Requests that fail
/// validation come back as 400 with the full validation report so the
/// caller can fix every field at once.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> HandlerResult<StudyPlan> {
    let report = validate_plan_request(&request);
    if report.has_errors() {
        return Err(AppError::Validation(report));
    }

    let plan = build_study_plan(request, &state.profile)?;
    Ok(Json(plan))
}

/// GET /v1/weight-profile
///
/// Return the weight coefficients the server allocates with.
pub async fn get_weight_profile(State(state): State<AppState>) -> HandlerResult<WeightProfile> {
    Ok(Json(state.profile.as_ref().clone()))
}
