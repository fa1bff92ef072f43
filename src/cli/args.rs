//! CLI argument definitions using clap
//!
//! Commands:
//! - rbf-props query <property_name> <property_file>
//! - rbf-props update <config_name> <config_value> <config_file>
//! - rbf-props upsert <config_name> <config_value> <config_file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query and edit Hadoop-style XML property files
#[derive(Parser, Debug)]
#[command(name = "rbf-props")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value of a property, or an empty line if it is absent
    Query {
        /// Property name to look up
        property_name: String,
        /// XML property file; a missing file prints an empty line
        property_file: PathBuf,
    },

    /// Replace the value of an existing property
    Update {
        /// Property name to update
        config_name: String,
        /// New value
        #[arg(allow_hyphen_values = true)]
        config_value: String,
        /// XML property file, must exist
        config_file: PathBuf,
    },

    /// Replace the value of a property, appending it if absent
    Upsert {
        /// Property name to update or add
        config_name: String,
        /// New value
        #[arg(allow_hyphen_values = true)]
        config_value: String,
        /// XML property file, must exist
        config_file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
