//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Sublogic CLI - Evaluate subjective-logic operators on binomial opinions.
///
/// Opinions are written as `b,d,u,a` (belief, disbelief, uncertainty,
/// base rate), for example `0.6,0.3,0.1,0.5`.
#[derive(Debug, Parser)]
#[command(name = "sublogic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SUBLOGIC_CONFIG")]
    pub config: Option<String>,

    /// Comparison tolerance for `compare`
    #[arg(short, long, global = true)]
    pub epsilon: Option<f64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply an operator to opinions
    Apply(ApplyArgs),

    /// Validate an opinion
    Check(CheckArgs),

    /// Compare two opinions under the configured tolerance
    Compare(CompareArgs),

    /// List the available operators
    Operators,

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the apply command.
#[derive(Debug, Parser)]
pub struct ApplyArgs {
    /// Operator name (e.g., cumulative-fusion)
    pub operator: String,

    /// Operands as `b,d,u,a`; `none` marks an absent operand
    pub opinions: Vec<String>,

    /// JSON file with an array of opinion records (`-` for stdin)
    #[arg(long, conflicts_with = "opinions")]
    pub file: Option<String>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Opinion as `b,d,u,a`
    pub opinion: String,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// First opinion as `b,d,u,a` or `none`
    pub first: String,

    /// Second opinion as `b,d,u,a` or `none`
    pub second: String,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub init: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
