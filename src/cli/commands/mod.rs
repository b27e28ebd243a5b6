//! Command implementations

mod board;
mod move_client;
mod seed;
mod serve;
mod show;

pub use board::board;
pub use move_client::move_client;
pub use seed::seed;
pub use serve::serve;
pub use show::show;
