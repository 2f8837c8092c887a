//! Trust discounting operators
//!
//! In every operator here the first opinion(s) are trust in an advisor and
//! the last is the advisor's (functional) opinion about the proposition.
//! The result keeps the advisor's base rate.

use super::finish;
use crate::error::{OpinionError, Result};
use crate::operator::{Arity, Operator};
use crate::Opinion;

/// Discount `opinion` by the projected trust in its source
///
/// Belief and disbelief are scaled by `p = b1 + u1 * a1`. Uncertainty is
/// recomputed as `1 - b - d` so the result sums to 1 despite rounding.
pub fn trust_discounting(trust: &Opinion, opinion: &Opinion) -> Result<Opinion> {
    let p = trust.projected_probability();
    discount(Operator::TrustDiscounting, p, opinion)
}

/// Discount with opposite belief
///
/// Distrust in the source is taken as evidence for the opposite of what it
/// says: agreement terms (`b1 * b2 + d1 * d2`) become belief, disagreement
/// terms (`b1 * d2 + d1 * b2`) become disbelief.
pub fn trust_discounting_opposite_belief(trust: &Opinion, opinion: &Opinion) -> Result<Opinion> {
    let (b1, d1, u1, _) = trust.as_tuple();
    let (b2, d2, u2, a2) = opinion.as_tuple();

    let b = b1 * b2 + d1 * d2;
    let d = b1 * d2 + d1 * b2;
    let u = u1 + (b1 + d1) * u2;

    finish(Operator::TrustDiscountingOppositeBelief, b, d, u, a2)
}

/// Discount along a linear chain of trust edges
///
/// Every opinion but the last is a trust edge; the product of their
/// projected probabilities discounts the last (functional trust) opinion.
/// Needs at least two opinions.
pub fn multi_edge_trust_discounting(chain: &[Opinion]) -> Result<Opinion> {
    const OP: Operator = Operator::MultiEdgeTrustDiscounting;

    let Some((functional, edges)) = chain.split_last().filter(|(_, edges)| !edges.is_empty())
    else {
        return Err(OpinionError::Arity {
            operator: OP,
            expected: Arity::AtLeast(2),
            actual: chain.len(),
        });
    };

    let p = edges
        .iter()
        .map(Opinion::projected_probability)
        .product::<f64>();

    discount(OP, p, functional)
}

fn discount(operator: Operator, p: f64, opinion: &Opinion) -> Result<Opinion> {
    let b = p * opinion.belief();
    let d = p * opinion.disbelief();
    finish(operator, b, d, 1.0 - b - d, opinion.base_rate())
}
