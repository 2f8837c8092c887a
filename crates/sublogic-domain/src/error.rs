//! Error types for opinion construction and the operator algebra

use crate::operator::{Arity, Operator};
use thiserror::Error;

/// Result type alias for opinion operations.
pub type Result<T> = std::result::Result<T, OpinionError>;

/// Errors raised by the opinion type and its operators.
///
/// No variant carries a partial opinion: a failed computation yields
/// nothing but the reason it failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpinionError {
    /// Coordinates outside [0, 1], or belief + disbelief + uncertainty != 1
    #[error(
        "invalid opinion ({belief}, {disbelief}, {uncertainty}, {base_rate}): \
         values must lie in [0, 1] and belief + disbelief + uncertainty must equal 1"
    )]
    InvalidOpinion {
        /// Rejected belief
        belief: f64,
        /// Rejected disbelief
        disbelief: f64,
        /// Rejected uncertainty
        uncertainty: f64,
        /// Rejected base rate
        base_rate: f64,
    },

    /// A required operand was not supplied
    #[error("{operator}: operand {position} is absent")]
    MissingOperand {
        /// Operator that was invoked
        operator: Operator,
        /// Zero-based position of the absent operand
        position: usize,
    },

    /// Wrong number of operands
    #[error("{operator}: expected {expected} operand(s), got {actual}")]
    Arity {
        /// Operator that was invoked
        operator: Operator,
        /// Accepted operand count
        expected: Arity,
        /// Supplied operand count
        actual: usize,
    },

    /// The closed-form formula is undefined for these inputs
    #[error("{operator}: {reason}")]
    Singularity {
        /// Operator that was invoked
        operator: Operator,
        /// Condition that made the formula undefined
        reason: &'static str,
    },

    /// The formula produced a tuple that is not a valid opinion
    #[error("{operator}: result out of domain: {reason}")]
    OutOfDomain {
        /// Operator that was invoked
        operator: Operator,
        /// Which part of the result left the domain
        reason: String,
    },

    /// Textual opinion could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpinionError {
    /// Operator that raised the error, if any
    pub fn operator(&self) -> Option<Operator> {
        match self {
            OpinionError::MissingOperand { operator, .. }
            | OpinionError::Arity { operator, .. }
            | OpinionError::Singularity { operator, .. }
            | OpinionError::OutOfDomain { operator, .. } => Some(*operator),
            OpinionError::InvalidOpinion { .. } | OpinionError::Parse(_) => None,
        }
    }
}
