//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.init {
        config.save_to(path)?;
        println!(
            "{}",
            formatter.success(&format!("Configuration written to {}", path.display()))
        );
        return Ok(());
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("# {}", path.display());
    print!("{}", contents);
    Ok(())
}
