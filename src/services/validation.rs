//! Validation for incoming plan requests.
//!
//! Checks the documented attribute bounds before a request reaches the
//! allocator. The allocator itself stays defined for degenerate inputs,
//! so validation is a reporting layer: callers get a full report of
//! everything wrong instead of the first failure.

use serde::{Deserialize, Serialize};

use crate::api::{PlanRequest, SubjectRequest};

/// Inclusive bounds for the four subject attribute scores.
pub const ATTRIBUTE_MIN: f64 = 1.0;
pub const ATTRIBUTE_MAX: f64 = 100.0;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Warning,
    Error,
}

impl Criticality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Warning => "warning",
            Criticality::Error => "error",
        }
    }
}

/// A single validation finding.
///
/// `subject_index` and `subject_name` are absent for findings about the
/// request as a whole, such as a missing subject list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub subject_index: Option<usize>,
    pub subject_name: Option<String>,
    pub field_name: String,
    pub current_value: String,
    pub expected_value: String,
    pub criticality: Criticality,
    pub description: String,
}

impl ValidationIssue {
    fn error(
        subject: Option<(usize, &str)>,
        field_name: &str,
        current_value: String,
        expected_value: &str,
        description: String,
    ) -> Self {
        Self::with_criticality(
            Criticality::Error,
            subject,
            field_name,
            current_value,
            expected_value,
            description,
        )
    }

    fn warning(
        subject: Option<(usize, &str)>,
        field_name: &str,
        current_value: String,
        expected_value: &str,
        description: String,
    ) -> Self {
        Self::with_criticality(
            Criticality::Warning,
            subject,
            field_name,
            current_value,
            expected_value,
            description,
        )
    }

    fn with_criticality(
        criticality: Criticality,
        subject: Option<(usize, &str)>,
        field_name: &str,
        current_value: String,
        expected_value: &str,
        description: String,
    ) -> Self {
        Self {
            subject_index: subject.map(|(index, _)| index),
            subject_name: subject.map(|(_, name)| name.to_string()),
            field_name: field_name.to_string(),
            current_value,
            expected_value: expected_value.to_string(),
            criticality,
            description,
        }
    }
}

/// Validation report for a plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_subjects: usize,
    /// Subjects with no error-level finding. Warnings do not disqualify.
    pub valid_subjects: usize,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validate a single subject.
///
/// Returns every finding for the subject, possibly several per field.
pub fn validate_subject(index: usize, subject: &SubjectRequest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let tag = Some((index, subject.name.as_str()));

    if subject.name.trim().is_empty() {
        issues.push(ValidationIssue::warning(
            tag,
            "name",
            subject.name.clone(),
            "non-empty string",
            format!("Subject #{} has no name", index + 1),
        ));
    }

    let attributes = [
        ("preparation", subject.preparation),
        ("syllabus_size", subject.syllabus_size),
        ("difficulty", subject.difficulty),
        ("exam_weight", subject.exam_weight),
    ];

    for (field_name, value) in attributes {
        if !value.is_finite() || !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
            issues.push(ValidationIssue::error(
                tag,
                field_name,
                format!("{}", value),
                "1-100",
                format!(
                    "Value {} for '{}' is outside the valid range",
                    value, field_name
                ),
            ));
        }
    }

    let desired = subject.desired_days.value();
    if !desired.is_finite() || desired < 0.0 {
        issues.push(ValidationIssue::error(
            tag,
            "desired_days",
            format!("{}", desired),
            ">= 0",
            "Desired days must be a non-negative number".to_string(),
        ));
    } else if desired == 0.0 {
        issues.push(ValidationIssue::warning(
            tag,
            "desired_days",
            "0".to_string(),
            "> 0",
            "Subject asks for zero days and will receive none".to_string(),
        ));
    }

    issues
}

/// Validate a whole plan request.
///
/// Collects subject-level findings plus request-level ones (empty subject
/// list, non-positive budget) into a single report.
pub fn validate_plan_request(request: &PlanRequest) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let budget = request.total_days.value();
    if !budget.is_finite() || budget <= 0.0 {
        errors.push(ValidationIssue::error(
            None,
            "total_days",
            format!("{}", budget),
            "> 0",
            "Total study days must be a positive number".to_string(),
        ));
    }

    if request.subjects.is_empty() {
        errors.push(ValidationIssue::error(
            None,
            "subjects",
            "0 subjects".to_string(),
            "at least one subject",
            "A plan needs at least one subject to allocate days to".to_string(),
        ));
    }

    let mut invalid_subjects = 0;
    for (index, subject) in request.subjects.iter().enumerate() {
        let issues = validate_subject(index, subject);
        if issues.iter().any(|i| i.criticality == Criticality::Error) {
            invalid_subjects += 1;
        }
        for issue in issues {
            match issue.criticality {
                Criticality::Error => errors.push(issue),
                Criticality::Warning => warnings.push(issue),
            }
        }
    }

    ValidationReport {
        total_subjects: request.subjects.len(),
        valid_subjects: request.subjects.len() - invalid_subjects,
        errors,
        warnings,
    }
}
