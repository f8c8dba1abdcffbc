//! Aggregate totals and per-subject outcomes for a finished allocation.
//!
//! The summary is what a caller reports back to the user: days used
//! against the budget, the residual the redistribution loop could not
//! place, and per subject whether the request was met in full or cut.

use serde::{Deserialize, Serialize};

use crate::api::SubjectAllocation;
use crate::models::StudyDays;
use crate::services::allocator::CONVERGENCE_EPSILON_DAYS;

/// Whether a subject received everything it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    Full,
    Reduced,
}

impl AllocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationStatus::Full => "full",
            AllocationStatus::Reduced => "reduced",
        }
    }
}

/// Outcome line for one subject: what it asked for and what it got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectOutcome {
    pub name: String,
    pub requested: StudyDays,
    pub allocated: StudyDays,
    pub shortfall: StudyDays,
    pub status: AllocationStatus,
}

/// Aggregate view of a study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of all desired days
    pub total_requested: StudyDays,
    /// Sum of all granted days
    pub total_allocated: StudyDays,
    /// Budget left undistributed
    pub unallocated: StudyDays,
    /// Subjects whose request was met in full
    pub fully_met_count: usize,
    /// Subjects that received less than they asked for
    pub reduced_count: usize,
    /// Per-subject outcome lines in allocation order
    pub outcomes: Vec<SubjectOutcome>,
}

/// Fold allocation results into a `PlanSummary`.
///
/// A subject counts as fully met when its shortfall is within the
/// allocator's convergence tolerance. `unallocated` is the budget minus
/// the granted total, clamped at zero against floating-point dust.
pub fn compute_plan_summary(
    allocations: &[SubjectAllocation],
    total_days: StudyDays,
) -> PlanSummary {
    let total_requested: f64 = allocations.iter().map(|a| a.desired_days.value()).sum();
    let total_allocated: f64 = allocations.iter().map(|a| a.allocated_days.value()).sum();
    let unallocated = (total_days.value() - total_allocated).max(0.0);

    let outcomes: Vec<SubjectOutcome> = allocations
        .iter()
        .map(|allocation| {
            let shortfall = allocation.shortfall();
            let status = if shortfall.value() <= CONVERGENCE_EPSILON_DAYS {
                AllocationStatus::Full
            } else {
                AllocationStatus::Reduced
            };
            SubjectOutcome {
                name: allocation.name.clone(),
                requested: allocation.desired_days,
                allocated: allocation.allocated_days,
                shortfall,
                status,
            }
        })
        .collect();

    let fully_met_count = outcomes
        .iter()
        .filter(|o| o.status == AllocationStatus::Full)
        .count();
    let reduced_count = outcomes.len() - fully_met_count;

    PlanSummary {
        total_requested: StudyDays::new(total_requested),
        total_allocated: StudyDays::new(total_allocated),
        unallocated: StudyDays::new(unallocated),
        fully_met_count,
        reduced_count,
        outcomes,
    }
}
