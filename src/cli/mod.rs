//! Command-line interface
//!
//! Subcommands and argument parsing for the wallet pair tool.

pub mod commands;

pub use commands::{Command, Opt};
