//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Opinion construction or operator failure
    #[error(transparent)]
    Opinion(#[from] sublogic_domain::OpinionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sublogic_domain::{Operator, OpinionError};

    #[test]
    fn test_opinion_error_is_transparent() {
        let err: CliError = OpinionError::MissingOperand {
            operator: Operator::Addition,
            position: 1,
        }
        .into();
        assert_eq!(err.to_string(), "addition: operand 1 is absent");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CliError::InvalidInput("no operands".into());
        assert_eq!(err.to_string(), "Invalid input: no operands");
    }
}
