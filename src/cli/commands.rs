//! CLI command implementations
//!
//! Each command is one load, at most one mutation, at most one save.
//! `query` treats a missing file as "no value"; `update` and `upsert`
//! treat it as fatal.

use std::path::Path;

use crate::observability;
use crate::store::{PropertyDocument, StoreError, UpsertOutcome};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_value;

/// Main CLI entry point
///
/// Parses arguments, loads settings, installs logging and dispatches.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    observability::init(config.severity(), config.log_format());

    let result = run_command(&config, cli.command);
    if let Err(e) = &result {
        tracing::debug!(event = "COMMAND_FAILED", code = e.code_str(), message = e.message());
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(config: &Config, cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query {
            property_name,
            property_file,
        } => {
            let value = query(config, &property_name, &property_file)?;
            write_value(&value)
        }
        Command::Update {
            config_name,
            config_value,
            config_file,
        } => update(config, &config_name, &config_value, &config_file).map(|_| ()),
        Command::Upsert {
            config_name,
            config_value,
            config_file,
        } => upsert(config, &config_name, &config_value, &config_file).map(|_| ()),
    }
}

/// Look up a property value
///
/// Returns the empty string when the property or the file is absent.
/// A malformed file is still an error.
pub fn query(config: &Config, name: &str, path: &Path) -> CliResult<String> {
    let document = match PropertyDocument::load(path, &config.load_options()) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            tracing::debug!(event = "PROPERTY_FILE_MISSING", path = %path.display());
            return Ok(String::new());
        }
        Err(e) => return Err(e.into()),
    };

    let value = document.get(name);
    tracing::debug!(
        event = "PROPERTY_QUERIED",
        name = name,
        path = %path.display(),
        found = value.is_some()
    );

    Ok(value.unwrap_or_default())
}

/// Replace the value of an existing property
///
/// Returns whether the property was found. When it was not, the file is
/// left exactly as it was.
pub fn update(config: &Config, name: &str, value: &str, path: &Path) -> CliResult<bool> {
    let mut document = load_for_update(config, name, path)?;

    if !document.set(name, value) {
        tracing::info!(event = "PROPERTY_NOT_FOUND", name = name, path = %path.display());
        return Ok(false);
    }

    document.save(path, &config.save_options())?;
    tracing::info!(event = "PROPERTY_UPDATED", name = name, path = %path.display());

    Ok(true)
}

/// Replace the value of a property, appending it when absent
pub fn upsert(config: &Config, name: &str, value: &str, path: &Path) -> CliResult<UpsertOutcome> {
    let mut document = load_for_update(config, name, path)?;

    let outcome = document.upsert(name, value);
    document.save(path, &config.save_options())?;

    match outcome {
        UpsertOutcome::Updated => {
            tracing::info!(event = "PROPERTY_UPDATED", name = name, path = %path.display())
        }
        UpsertOutcome::Appended => {
            tracing::info!(event = "PROPERTY_APPENDED", name = name, path = %path.display())
        }
    }

    Ok(outcome)
}

fn load_for_update(config: &Config, name: &str, path: &Path) -> CliResult<PropertyDocument> {
    PropertyDocument::load(path, &config.load_options()).map_err(|e| match e {
        StoreError::NotFound(_) => CliError::file_not_found(format!(
            "Config file {} does not exist to perform update action on {} config.",
            path.display(),
            name
        )),
        other => other.into(),
    })
}
