//! Proportional study-day allocation with per-subject caps.
//!
//! The allocator seeds every subject with a share of the budget
//! proportional to its claim, capped at the subject's own desired days,
//! then repeatedly redistributes whatever the caps left unclaimed among
//! the subjects that still have headroom, weighted by their composite
//! weight. Water-filling, driven by a fixed pass limit and an exact
//! convergence check.

use log::{debug, warn};

use crate::api::{SubjectAllocation, SubjectRequest};
use crate::config::WeightProfile;
use crate::error::{AllocationError, AllocationResult};
use crate::models::StudyDays;
use crate::services::weights;

/// Maximum number of redistribution passes.
///
/// Each pass either exhausts the remainder or caps at least one more
/// subject, so typical inputs converge in two or three passes. A long
/// cascade of caps could in principle need more than this bound; any
/// residual left when the limit binds stays observable in the plan
/// summary rather than being forced out.
pub const MAX_REDISTRIBUTION_PASSES: usize = 10;

/// Remainders at or below this many days count as fully distributed.
pub const CONVERGENCE_EPSILON_DAYS: f64 = 1e-9;

/// Allocate a day budget across subjects, weighted by composite priority.
///
/// Returns one `SubjectAllocation` per input subject, in input order,
/// annotated with `weight`, `claim` and `allocated_days`. The input slice
/// is left untouched.
///
/// Guarantees for every result: `0 <= allocated_days <= desired_days`,
/// and the allocations sum to at most `total_days`. The sum falls short
/// of the budget when every subject is capped (demand below budget) or
/// when the pass limit stops redistribution early.
///
/// # Errors
/// * `AllocationError::InvalidBudget` if `total_days` is not a positive
///   finite number. An empty subject list is not an error and yields an
///   empty result.
pub fn allocate_study_days(
    subjects: &[SubjectRequest],
    total_days: StudyDays,
    profile: &WeightProfile,
) -> AllocationResult<Vec<SubjectAllocation>> {
    let budget = total_days.value();
    if !budget.is_finite() || budget <= 0.0 {
        return Err(AllocationError::invalid_budget(budget));
    }
    if subjects.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        "Allocating {} days across {} subjects",
        budget,
        subjects.len()
    );

    let mut allocations: Vec<SubjectAllocation> = subjects
        .iter()
        .map(|subject| {
            let weight = weights::composite_weight(subject, profile);
            SubjectAllocation {
                name: subject.name.clone(),
                preparation: subject.preparation,
                syllabus_size: subject.syllabus_size,
                difficulty: subject.difficulty,
                exam_weight: subject.exam_weight,
                desired_days: subject.desired_days,
                weight,
                claim: weight * subject.desired_days.value(),
                allocated_days: StudyDays::zero(),
            }
        })
        .collect();

    let total_claim: f64 = allocations.iter().map(|a| a.claim).sum();

    // Initial proportional pass. When every claim is zero the seeding is
    // skipped and the redistribution loop below spreads the whole budget
    // over whichever subjects still want days.
    if total_claim > 0.0 {
        for allocation in &mut allocations {
            let share = (allocation.claim / total_claim) * budget;
            let granted = share.min(allocation.desired_days.value());
            allocation.allocated_days = StudyDays::new(granted);
        }
    }

    let mut remaining = budget - allocated_sum(&allocations);
    let mut passes = 0;

    while remaining > CONVERGENCE_EPSILON_DAYS && passes < MAX_REDISTRIBUTION_PASSES {
        let candidates: Vec<usize> = allocations
            .iter()
            .enumerate()
            .filter(|(_, a)| a.allocated_days.value() < a.desired_days.value())
            .map(|(index, _)| index)
            .collect();

        if candidates.is_empty() {
            debug!("All subjects capped with {:.6} days left over", remaining);
            break;
        }

        let total_weight: f64 = candidates.iter().map(|&i| allocations[i].weight).sum();
        if total_weight <= 0.0 {
            debug!("Remaining candidates carry no weight; stopping redistribution");
            break;
        }

        debug!(
            "Redistribution pass {}: {} candidates, {:.6} days remaining",
            passes + 1,
            candidates.len(),
            remaining
        );

        for &index in &candidates {
            let allocation = &mut allocations[index];
            let share = (allocation.weight / total_weight) * remaining;
            let granted =
                (allocation.allocated_days.value() + share).min(allocation.desired_days.value());
            allocation.allocated_days = StudyDays::new(granted);
        }

        remaining = budget - allocated_sum(&allocations);
        passes += 1;
    }

    if remaining > CONVERGENCE_EPSILON_DAYS && passes == MAX_REDISTRIBUTION_PASSES {
        warn!(
            "Redistribution stopped at the {} pass limit with {:.6} days unallocated",
            MAX_REDISTRIBUTION_PASSES, remaining
        );
    }

    Ok(allocations)
}

fn allocated_sum(allocations: &[SubjectAllocation]) -> f64 {
    allocations.iter().map(|a| a.allocated_days.value()).sum()
}
