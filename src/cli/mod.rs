//! Command-line interface for reckon.
//!
//! Provides commands for evaluating calculator operations and printing
//! saved history files.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands};
