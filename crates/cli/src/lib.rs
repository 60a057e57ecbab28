//! Rundeck CLI - command handlers, output and configuration
//!
//! The binary in `main.rs` only parses arguments and wires these together.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod output;

pub use context::CommandContext;
pub use output::{OutputFormat, OutputFormatter};
