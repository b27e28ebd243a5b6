//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the board logic and the
//! persistence backend. Implementations live in the `adapters` module;
//! tests provide in-memory mocks.

mod client_store;

pub use client_store::ClientStore;
