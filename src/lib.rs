//! # FairScale
//!
//! Proportional-fair study-day allocation engine.
//!
//! This crate distributes a fixed pool of study days across competing exam
//! subjects. Each subject gets a composite priority weight from its
//! preparation level, syllabus size, exam weight and difficulty, claims a
//! proportional share of the budget capped at its own desired maximum, and
//! the allocator then water-fills whatever the caps left over among the
//! subjects that still have headroom. The result is an explainable plan, not
//! a general constrained-optimization solve.
//!
//! ## Features
//!
//! - **Weight Scoring**: Composite priority weights with configurable coefficients
//! - **Allocation**: Capped proportional water-filling with iterative redistribution
//! - **Summaries**: Per-subject outcomes plus days-used / shortfall totals
//! - **Validation**: Full bound-checking reports for incoming requests
//! - **Data Loading**: Parse plan requests from JSON with content checksums
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for requests and plans
//! - [`models`]: Core value types and JSON parsing
//! - [`services`]: Weight, allocator, summary, validation and planner logic
//! - [`config`]: Weight-profile configuration from TOML and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use fairscale::api::{PlanRequest, SubjectRequest, StudyDays};
//! use fairscale::config::WeightProfile;
//! use fairscale::services::build_study_plan;
//!
//! let request = PlanRequest::new(
//!     "finals",
//!     StudyDays::new(30.0),
//!     vec![
//!         SubjectRequest::new("Math", 30.0, 80.0, 70.0, 90.0, StudyDays::new(12.0)),
//!         SubjectRequest::new("History", 60.0, 40.0, 30.0, 50.0, StudyDays::new(10.0)),
//!     ],
//! );
//!
//! let plan = build_study_plan(request, &WeightProfile::default()).unwrap();
//! assert_eq!(plan.subjects.len(), 2);
//! ```

pub mod api;

pub mod checksum;
pub mod config;
pub mod error;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
