//! Public API surface for the study-plan engine.
//!
//! This file consolidates the DTO types for the library and HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::services::summary::AllocationStatus;
pub use crate::services::summary::PlanSummary;
pub use crate::services::summary::SubjectOutcome;
pub use crate::services::validation::ValidationIssue;
pub use crate::services::validation::ValidationReport;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::models::StudyDays;

/// One subject competing for a share of the study budget.
///
/// The four attribute scores are expected in `[1, 100]`; see
/// `services::validation` for the report produced when they are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// Subject name shown in the resulting plan
    #[serde(default)]
    pub name: String,
    /// Current preparation level (1-100, higher = better prepared)
    pub preparation: f64,
    /// Relative syllabus size (1-100)
    pub syllabus_size: f64,
    /// Perceived difficulty (1-100)
    pub difficulty: f64,
    /// Exam weight or importance (1-100)
    pub exam_weight: f64,
    /// Upper bound on study days this subject can absorb
    pub desired_days: StudyDays,
}

impl SubjectRequest {
    pub fn new(
        name: impl Into<String>,
        preparation: f64,
        syllabus_size: f64,
        difficulty: f64,
        exam_weight: f64,
        desired_days: StudyDays,
    ) -> Self {
        Self {
            name: name.into(),
            preparation,
            syllabus_size,
            difficulty,
            exam_weight,
            desired_days,
        }
    }
}

/// Allocation outcome for a single subject.
///
/// Carries the input attributes alongside the derived quantities so a plan
/// is self-describing without the original request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAllocation {
    /// Subject name from the request
    pub name: String,
    /// Preparation level from the request
    pub preparation: f64,
    /// Syllabus size from the request
    pub syllabus_size: f64,
    /// Difficulty from the request
    pub difficulty: f64,
    /// Exam weight from the request
    pub exam_weight: f64,
    /// Requested ceiling in study days
    pub desired_days: StudyDays,
    /// Composite weight under the active profile
    pub weight: f64,
    /// Raw claim on the budget (`weight * desired_days`)
    pub claim: f64,
    /// Days granted by the allocator
    pub allocated_days: StudyDays,
}

impl SubjectAllocation {
    /// Days short of the requested ceiling. Zero when fully met.
    pub fn shortfall(&self) -> StudyDays {
        StudyDays::new((self.desired_days.value() - self.allocated_days.value()).max(0.0))
    }
}

/// Top-level plan request with metadata and subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Plan name
    #[serde(default)]
    pub name: String,
    /// SHA256 checksum of the request data
    #[serde(default)]
    pub checksum: String,
    /// Total study days available before the exams
    pub total_days: StudyDays,
    /// Subjects competing for the budget
    pub subjects: Vec<SubjectRequest>,
}

impl PlanRequest {
    pub fn new(
        name: impl Into<String>,
        total_days: StudyDays,
        subjects: Vec<SubjectRequest>,
    ) -> Self {
        Self {
            name: name.into(),
            checksum: String::new(),
            total_days,
            subjects,
        }
    }
}

/// Complete study plan produced from a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Plan name carried over from the request
    #[serde(default)]
    pub name: String,
    /// SHA256 checksum identifying the request data
    #[serde(default)]
    pub checksum: String,
    /// When the plan was generated
    pub generated_at: DateTime<Utc>,
    /// Budget the plan was computed against
    pub total_days: StudyDays,
    /// Per-subject allocations in request order
    pub subjects: Vec<SubjectAllocation>,
    /// Aggregate totals and per-subject outcomes
    pub summary: PlanSummary,
}
