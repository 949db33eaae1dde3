//! Cart types
//!
//! - Commands: requests from any screen to change the cart
//! - Snapshots: immutable cart state published after every command

pub mod command;
pub mod snapshot;

// Re-exports
pub use command::{CartCommand, CartCommandType};
pub use snapshot::{CartEntry, CartSnapshot};
