//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers
//! that can be used by any HTTP server implementation or directly by
//! clients (CLI, tests).
//!
//! ## Design
//!
//! - **Handlers take an explicit store handle**: no global connection
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{get_client, index, list_clients, update_clients};
pub use types::{INDEX_MESSAGE, IndexData, ListClientsQuery, SubmittedClient};
