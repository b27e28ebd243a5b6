//! API error types with HTTP status code mapping

use serde::Serialize;

use crate::core::error::BoardError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown route (404)
    NotFound,
    /// Invalid request, including ids that do not resolve (400)
    BadRequest,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and messages
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Short human-readable summary
    pub message: String,
    /// Detailed explanation
    pub long_message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>, long_message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            long_message: long_message.into(),
        }
    }

    /// Create a not found error (unknown route)
    #[must_use]
    pub fn not_found(long_message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, "Not found.", long_message)
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>, long_message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message, long_message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(long_message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, "Internal error.", long_message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// Serializable response body
    #[must_use]
    pub fn body(&self) -> ApiErrorData {
        ApiErrorData::from(self)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.code.as_str(), self.message, self.long_message)
    }
}

impl std::error::Error for ApiError {}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            // Unresolved ids are reported as bad input, not as a missing route
            BoardError::InvalidArgument {
                message,
                long_message,
            }
            | BoardError::NotFound {
                message,
                long_message,
            } => Self::bad_request(message, long_message),
            BoardError::Store(err) => {
                log::error!("store failure while serving request: {err}");
                Self::internal(err.to_string())
            },
        }
    }
}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Short summary
    pub message: String,
    /// Detailed explanation
    pub long_message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.message.clone(),
            long_message: err.long_message.clone(),
        }
    }
}
