//! Domain models for shiptivity
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Client`] - One card on the board
//! - [`Status`] - Which swimlane a client sits in
//! - [`Lane`] - Clients of one status, densely ranked 1..N
//! - [`Board`] - All three lanes, and the drag-drop move

mod board;
mod client;
mod lane;
mod status;

pub use board::{Board, MoveReport};
pub use client::{Client, ClientChange, ClientId};
pub use lane::{Lane, Placement, Rank};
pub use status::Status;
