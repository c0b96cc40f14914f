//! CLI commands
//!
//! Command implementations for the `contact` binary.

mod config;
mod notify;
mod send;
mod style;

pub use config::run_config;
pub use send::{run_send, SendOptions};
