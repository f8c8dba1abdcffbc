//! Error types for plan computation.

/// Result type for allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Error type for the core allocation routines.
///
/// Degenerate inputs that have a defined fallback (empty subject list,
/// all-zero claims) are NOT errors; they produce well-defined results.
/// Only a non-positive day budget is rejected outright.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    /// The total day budget must be strictly positive.
    #[error("invalid budget: total study days must be positive, got {days}")]
    InvalidBudget { days: f64 },
}

impl AllocationError {
    /// Create an invalid-budget error from the rejected value.
    pub fn invalid_budget(days: f64) -> Self {
        Self::InvalidBudget { days }
    }
}
