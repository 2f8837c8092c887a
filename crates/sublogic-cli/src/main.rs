//! Sublogic CLI - Command-line driver for the subjective-logic operators.

use clap::Parser;
use std::path::PathBuf;
use sublogic_cli::commands;
use sublogic_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sublogic_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults when the file is absent
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // The file picks the log level, so logging starts once it is read
    sublogic_cli::init_tracing(&config.settings.log_level, cli.verbose);
    tracing::debug!(
        path = %config_path.display(),
        exists = config_path.exists(),
        "loaded configuration"
    );

    // Command-line flags override the file
    if let Some(epsilon) = cli.epsilon {
        config.tolerance.epsilon = epsilon;
    }
    if let Some(format) = cli.format {
        config.settings.format = format.into();
    }
    if cli.no_color {
        config.settings.color = false;
    }

    let tolerance = config.tolerance()?;
    let formatter = Formatter::new(config.settings.format, config.settings.color);

    match cli.command {
        Command::Apply(args) => commands::execute_apply(args, &formatter)?,
        Command::Check(args) => commands::execute_check(args, &formatter)?,
        Command::Compare(args) => commands::execute_compare(args, &tolerance, &formatter)?,
        Command::Operators => commands::execute_operators(&formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}
