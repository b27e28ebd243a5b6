//! Input validation helpers
//!
//! Turn raw request values into typed ones, failing with the
//! `{message, long_message}` pairs clients display.

use crate::core::error::{
    BoardError, ID_NOT_INTEGER, INVALID_ID, INVALID_PRIORITY, INVALID_STATUS, PRIORITY_VALUES,
    STATUS_VALUES,
};
use crate::core::models::{ClientId, Status};

/// Parse a path or argument id
pub fn parse_id(raw: &str) -> Result<ClientId, BoardError> {
    raw.trim()
        .parse::<ClientId>()
        .map_err(|_| BoardError::invalid(INVALID_ID, ID_NOT_INTEGER))
}

/// Parse a status name
pub fn parse_status(raw: &str) -> Result<Status, BoardError> {
    raw.parse::<Status>()
        .map_err(|_| BoardError::invalid(INVALID_STATUS, STATUS_VALUES))
}

/// Parse an optional status, treating absence as backlog
pub fn parse_optional_status(raw: Option<&str>) -> Result<Status, BoardError> {
    Status::from_optional(raw).ok_or_else(|| BoardError::invalid(INVALID_STATUS, STATUS_VALUES))
}

/// Check that a submitted priority is a non-negative whole number
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
pub fn validate_priority(raw: f64) -> Result<u32, BoardError> {
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
        Ok(raw as u32)
    } else {
        Err(BoardError::invalid(INVALID_PRIORITY, PRIORITY_VALUES))
    }
}
