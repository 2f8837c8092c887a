//! Sublogic CLI library.
//!
//! This library provides the core functionality for the `sublogic`
//! command-line interface: argument parsing, configuration management,
//! command execution and output formatting. Opinion semantics live in
//! `sublogic-domain`; this crate only parses operands and prints results.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug and the
/// configured level applies.
pub fn init_tracing(log_level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level(log_level, verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Level used when `RUST_LOG` is unset: `--verbose` beats the config file.
fn fallback_level(log_level: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        log_level
    }
}
