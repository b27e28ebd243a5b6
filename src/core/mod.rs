//! Core domain logic for shiptivity
//!
//! This module contains the board logic with no SQL or HTTP in it.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Client, Status, Lane, Board)
//! - `services/` - Reconciliation, reordering and queries
//! - `ports/` - Trait definitions for the store
//! - `error` - Service and store error types

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{BoardError, StoreError, StoreResult};
