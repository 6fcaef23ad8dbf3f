//! Validation helper functions for Todoist MCP server
//!
//! This module normalizes raw tool parameters and maps gateway errors onto
//! MCP errors whose message is shown to the client.

use crate::todoist::{self, Priority};
use mcp_attr::{Error, ErrorCode, Result as McpResult};
use tracing::warn;

/// Treat empty and whitespace-only strings as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Require a parameter to be present and not blank.
pub fn require(name: &str, value: &str) -> McpResult<()> {
    if value.trim().is_empty() {
        return Err(invalid_params(format!("Parameter '{}' must not be empty", name)));
    }
    Ok(())
}

/// Priorities outside 1-4 are ignored rather than rejected.
pub fn parse_priority(value: Option<i64>) -> Option<Priority> {
    value
        .and_then(|v| u8::try_from(v).ok())
        .and_then(Priority::new)
}

/// Non-negative limit, `None` for anything else.
pub fn parse_limit(value: Option<i64>) -> Option<usize> {
    value.and_then(|v| usize::try_from(v).ok())
}

pub fn invalid_params(message: String) -> Error {
    Error::new(ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Convert a gateway failure into an MCP error visible to the client.
///
/// Input problems become `INVALID_PARAMS`; transport and decode failures
/// become `INTERNAL_ERROR` with the API detail kept as diagnostics.
pub fn api_error(err: todoist::Error) -> Error {
    match err {
        todoist::Error::MissingTaskReference | todoist::Error::InvalidInput(_) => {
            invalid_params(err.to_string())
        }
        other => {
            warn!(error = %other, status = ?other.status(), "Todoist call failed");
            Error::new(ErrorCode::INTERNAL_ERROR)
                .with_message(format!("Todoist API error: {}", other), true)
        }
    }
}
