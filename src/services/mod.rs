//! Service layer for the allocation engine.
//!
//! This module contains the pure computation services: weight scoring,
//! the proportional allocator, plan summaries, request validation and
//! plan assembly. Services hold no state and perform no I/O.

pub mod allocator;

pub mod planner;

pub mod summary;

pub mod validation;

pub mod weights;

pub use allocator::{allocate_study_days, CONVERGENCE_EPSILON_DAYS, MAX_REDISTRIBUTION_PASSES};
pub use planner::build_study_plan;
pub use summary::compute_plan_summary;
pub use validation::validate_plan_request;
pub use weights::{claim, composite_weight};
