//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The plan and validation DTOs are re-exported from the core API surface
//! since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Plans
    PlanRequest, PlanSummary, StudyPlan, SubjectAllocation, SubjectOutcome, SubjectRequest,
    // Validation
    ValidationIssue, ValidationReport,
};
pub use crate::config::WeightProfile;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
