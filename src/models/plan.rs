// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// String-based parsing for plan requests. A structural check runs before
// deserialization so a missing subject list fails with a clear message
// instead of a serde type error, and the content checksum is filled in
// when the document does not carry one.

use crate::api;
use crate::checksum::calculate_checksum;
use anyhow::{Context, Result};

fn validate_input_request(request_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(request_json).context("Invalid plan request JSON")?;
    let has_subjects = value
        .as_object()
        .and_then(|obj| obj.get("subjects"))
        .is_some();
    if !has_subjects {
        anyhow::bail!("Missing required 'subjects' field");
    }
    Ok(())
}

/// Parse a plan request from a JSON string.
///
/// # Returns
///
/// A `PlanRequest` with its checksum populated: the one from the document
/// when present, otherwise the SHA256 of the raw request string.
pub fn parse_plan_request_json_str(request_json: &str) -> Result<api::PlanRequest> {
    validate_input_request(request_json)?;

    let mut request: api::PlanRequest = serde_json::from_str(request_json)
        .context("Failed to deserialize plan request JSON using Serde")?;

    if request.checksum.is_empty() {
        request.checksum = calculate_checksum(request_json);
    }

    Ok(request)
}

// ============================================================================
// Tests
// ============================================================================
