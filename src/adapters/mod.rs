//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `sqlite/` - SQLite-backed [`ClientStore`](crate::core::ports::ClientStore)

pub mod sqlite;
