//! rbf-props CLI entry point
//!
//! Minimal entrypoint that:
//! 1. Parses arguments and dispatches (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure

use rbf_props::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
