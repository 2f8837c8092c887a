//! The closed set of opinion operators
//!
//! [`Operator`] names every operator in the algebra so callers can select
//! one at runtime (for example from a command line) and dispatch through
//! [`Operator::apply`], which is also the boundary where absent operands
//! are reported.

use crate::error::{OpinionError, Result};
use crate::operators::{self, experimental};
use crate::Opinion;
use std::fmt;
use std::str::FromStr;

/// Number of operands an operator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one operand
    Unary,
    /// Exactly two operands
    Binary,
    /// A chain of at least this many operands
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` operands are acceptable
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Unary => count == 1,
            Arity::Binary => count == 2,
            Arity::AtLeast(min) => count >= *min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "1"),
            Arity::Binary => write!(f, "2"),
            Arity::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

/// Operators of the binomial opinion algebra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Sum of opinions about disjoint propositions
    Addition,
    /// Opinion about the negated proposition
    Complement,
    /// Binomial multiplication (AND)
    Multiplication,
    /// Binomial comultiplication (OR)
    Comultiplication,
    /// Cumulative belief fusion
    CumulativeFusion,
    /// Averaging belief fusion
    AveragingFusion,
    /// Belief constraint fusion
    ConstraintFusion,
    /// Weighted belief fusion
    WeightedFusion,
    /// Trust discounting by projected trust
    TrustDiscounting,
    /// Trust discounting with opposite belief
    TrustDiscountingOppositeBelief,
    /// Trust discounting along a chain of edges
    MultiEdgeTrustDiscounting,
    /// Fixed-weight blend (experimental)
    ImpactFusion,
}

impl Operator {
    /// Every operator, in declaration order
    pub const ALL: [Operator; 12] = [
        Operator::Addition,
        Operator::Complement,
        Operator::Multiplication,
        Operator::Comultiplication,
        Operator::CumulativeFusion,
        Operator::AveragingFusion,
        Operator::ConstraintFusion,
        Operator::WeightedFusion,
        Operator::TrustDiscounting,
        Operator::TrustDiscountingOppositeBelief,
        Operator::MultiEdgeTrustDiscounting,
        Operator::ImpactFusion,
    ];

    /// Kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Addition => "addition",
            Operator::Complement => "complement",
            Operator::Multiplication => "multiplication",
            Operator::Comultiplication => "comultiplication",
            Operator::CumulativeFusion => "cumulative-fusion",
            Operator::AveragingFusion => "averaging-fusion",
            Operator::ConstraintFusion => "constraint-fusion",
            Operator::WeightedFusion => "weighted-fusion",
            Operator::TrustDiscounting => "trust-discounting",
            Operator::TrustDiscountingOppositeBelief => "trust-discounting-opposite-belief",
            Operator::MultiEdgeTrustDiscounting => "multi-edge-trust-discounting",
            Operator::ImpactFusion => "impact-fusion",
        }
    }

    /// Number of operands accepted
    pub fn arity(&self) -> Arity {
        match self {
            Operator::Complement => Arity::Unary,
            Operator::MultiEdgeTrustDiscounting => Arity::AtLeast(2),
            _ => Arity::Binary,
        }
    }

    /// Whether the operator is provisional and unverified
    pub fn is_experimental(&self) -> bool {
        matches!(self, Operator::ImpactFusion)
    }

    /// Apply the operator to operands that may be absent
    ///
    /// Fails on a wrong operand count or on the first absent operand;
    /// otherwise behaves like [`Operator::evaluate`].
    pub fn apply(&self, operands: &[Option<Opinion>]) -> Result<Opinion> {
        self.check_arity(operands.len())?;

        let present = operands
            .iter()
            .enumerate()
            .map(|(position, o)| {
                o.ok_or(OpinionError::MissingOperand {
                    operator: *self,
                    position,
                })
            })
            .collect::<Result<Vec<Opinion>>>()
            .inspect_err(|e| tracing::debug!("{}", e))?;

        self.evaluate(&present)
    }

    /// Apply the operator to present operands
    pub fn evaluate(&self, operands: &[Opinion]) -> Result<Opinion> {
        self.check_arity(operands.len())?;
        tracing::trace!(operator = %self, operands = operands.len(), "evaluating operator");

        let result = match (self, operands) {
            (Operator::Complement, [o]) => Ok(operators::complement(o)),
            (Operator::Addition, [o1, o2]) => operators::addition(o1, o2),
            (Operator::Multiplication, [o1, o2]) => operators::multiplication(o1, o2),
            (Operator::Comultiplication, [o1, o2]) => operators::comultiplication(o1, o2),
            (Operator::CumulativeFusion, [o1, o2]) => operators::cumulative_fusion(o1, o2),
            (Operator::AveragingFusion, [o1, o2]) => operators::averaging_fusion(o1, o2),
            (Operator::ConstraintFusion, [o1, o2]) => operators::constraint_fusion(o1, o2),
            (Operator::WeightedFusion, [o1, o2]) => operators::weighted_fusion(o1, o2),
            (Operator::TrustDiscounting, [o1, o2]) => operators::trust_discounting(o1, o2),
            (Operator::TrustDiscountingOppositeBelief, [o1, o2]) => {
                operators::trust_discounting_opposite_belief(o1, o2)
            }
            (Operator::MultiEdgeTrustDiscounting, chain) => {
                operators::multi_edge_trust_discounting(chain)
            }
            (Operator::ImpactFusion, [o1, o2]) => experimental::impact_fusion(o1, o2),
            // check_arity rules out every other shape
            _ => Err(self.arity_error(operands.len())),
        };

        if let Err(e) = &result {
            tracing::debug!("{}", e);
        }
        result
    }

    fn check_arity(&self, count: usize) -> Result<()> {
        if self.arity().accepts(count) {
            Ok(())
        } else {
            let err = self.arity_error(count);
            tracing::debug!("{}", err);
            Err(err)
        }
    }

    fn arity_error(&self, actual: usize) -> OpinionError {
        OpinionError::Arity {
            operator: *self,
            expected: self.arity(),
            actual,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = OpinionError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| OpinionError::Parse(format!("unknown operator '{}'", s)))
    }
}
