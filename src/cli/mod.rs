//! CLI module for rbf-props
//!
//! Provides command-line interface for:
//! - query: Print a property value
//! - update: Replace an existing property value
//! - upsert: Replace or append a property

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, run, run_command, update, upsert};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_line, write_value};
