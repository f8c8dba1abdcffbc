//! Plan assembly: one request in, one complete study plan out.
//!
//! Thin orchestration over the pure services: run the allocator, fold
//! the summary, stamp the result with a generation time and a content
//! checksum.

use chrono::Utc;
use log::debug;

use crate::api::{PlanRequest, StudyPlan};
use crate::checksum::calculate_checksum;
use crate::config::WeightProfile;
use crate::error::AllocationResult;
use crate::services::allocator::allocate_study_days;
use crate::services::summary::compute_plan_summary;

/// Build a complete study plan from a request.
///
/// The request's checksum is carried through when present; a request
/// without one (built in code rather than parsed from JSON) gets a
/// checksum over its serialized content, so identical requests yield
/// identical plan identities regardless of how they arrived.
///
/// # Errors
/// * `AllocationError::InvalidBudget` if the budget is not positive.
pub fn build_study_plan(
    request: PlanRequest,
    profile: &WeightProfile,
) -> AllocationResult<StudyPlan> {
    let subjects = allocate_study_days(&request.subjects, request.total_days, profile)?;
    let summary = compute_plan_summary(&subjects, request.total_days);

    let checksum = if request.checksum.is_empty() {
        calculate_checksum(&serde_json::to_string(&request).unwrap_or_default())
    } else {
        request.checksum
    };

    debug!(
        "Built plan '{}': {} subjects, {:.3}/{} days allocated",
        request.name,
        subjects.len(),
        summary.total_allocated.value(),
        request.total_days
    );

    Ok(StudyPlan {
        name: request.name,
        checksum,
        generated_at: Utc::now(),
        total_days: request.total_days,
        subjects,
        summary,
    })
}
