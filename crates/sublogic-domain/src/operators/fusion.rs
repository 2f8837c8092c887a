//! Belief fusion operators
//!
//! All four combine two opinions about the same proposition held by
//! independent sources. They share the boundary handling for fully certain
//! (u = 0) and fully uncertain (u = 1) operands, where the general closed
//! forms divide zero by zero.

use super::{finish, singularity};
use crate::error::Result;
use crate::operator::Operator;
use crate::tolerance::PRECISION;
use crate::Opinion;

fn mean(x: f64, y: f64) -> f64 {
    (x + y) / 2.0
}

/// Cumulative fusion: evidence from both sources accumulates
///
/// Two dogmatic operands (u1 = u2 = 0) fuse to the mean of their beliefs
/// and base rates with zero uncertainty. Two vacuous operands (u1 = u2 = 1)
/// fuse to a vacuous opinion with the mean base rate. A vacuous operand is
/// otherwise neutral: the other operand is returned unchanged.
pub fn cumulative_fusion(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    let (b1, _, u1, a1) = opinion1.as_tuple();
    let (b2, _, u2, a2) = opinion2.as_tuple();

    let (b, u, a) = if u1 == 0.0 && u2 == 0.0 {
        (mean(b1, b2), 0.0, mean(a1, a2))
    } else {
        let norm = u1 + u2 - u1 * u2;
        let b = (b1 * u2 + b2 * u1) / norm;
        let u = u1 * u2 / norm;
        // Product form; both weights vanish only at u1 = u2 = 1
        let (w1, w2) = (u2 * (1.0 - u1), u1 * (1.0 - u2));
        let a = if w1 + w2 > 0.0 {
            (a1 * w1 + a2 * w2) / (w1 + w2)
        } else {
            mean(a1, a2)
        };
        (b, u, a)
    };

    finish(Operator::CumulativeFusion, b, 1.0 - b - u, u, a)
}

/// Averaging fusion: sources are averaged rather than accumulated
///
/// Suited to dependent sources; applicable even when both are fully
/// certain. The base rate is always the mean of the operands' base rates.
pub fn averaging_fusion(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    let (b1, _, u1, a1) = opinion1.as_tuple();
    let (b2, _, u2, a2) = opinion2.as_tuple();

    let (b, u) = if u1 == 0.0 && u2 == 0.0 {
        (mean(b1, b2), 0.0)
    } else if u1 == 1.0 && u2 == 1.0 {
        (0.0, 1.0)
    } else {
        let norm = u1 + u2;
        ((b1 * u2 + b2 * u1) / norm, 2.0 * u1 * u2 / norm)
    };

    finish(Operator::AveragingFusion, b, 1.0 - b - u, u, mean(a1, a2))
}

/// Constraint fusion: Dempster-style combination normalized by conflict
///
/// The conflict mass `Con = b1 * d2 + d1 * b2` is removed by normalization;
/// total conflict (Con = 1) leaves nothing to normalize and fails. The base
/// rate is the certainty-weighted mean, or the plain mean when both
/// operands are vacuous.
pub fn constraint_fusion(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    const OP: Operator = Operator::ConstraintFusion;

    let (b1, d1, u1, a1) = opinion1.as_tuple();
    let (b2, d2, u2, a2) = opinion2.as_tuple();

    let harmony = b1 * u2 + b2 * u1 + b1 * b2;
    let conflict = b1 * d2 + b2 * d1;
    if 1.0 - conflict < PRECISION {
        return Err(singularity(OP, "opinions are totally conflicting (Con = 1)"));
    }

    let b = harmony / (1.0 - conflict);
    let u = u1 * u2 / (1.0 - conflict);
    let (c1, c2) = (1.0 - u1, 1.0 - u2);
    let a = if c1 + c2 > 0.0 {
        (a1 * c1 + a2 * c2) / (c1 + c2)
    } else {
        mean(a1, a2)
    };

    finish(OP, b, 1.0 - b - u, u, a)
}

/// Weighted fusion: each source weighted by its certainty (1 - u)
///
/// A vacuous operand carries no weight, so the other operand is returned
/// unchanged. Two dogmatic operands fuse to their means; two vacuous
/// operands fuse to a vacuous opinion with the mean base rate.
pub fn weighted_fusion(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    let (b1, _, u1, a1) = opinion1.as_tuple();
    let (b2, _, u2, a2) = opinion2.as_tuple();

    let (b, u, a) = if u1 == 0.0 && u2 == 0.0 {
        (mean(b1, b2), 0.0, mean(a1, a2))
    } else if u1 == 1.0 && u2 == 1.0 {
        (0.0, 1.0, mean(a1, a2))
    } else {
        // w1 + w2 = u1 + u2 - 2 * u1 * u2 in product form
        let (c1, c2) = (1.0 - u1, 1.0 - u2);
        let (w1, w2) = (c1 * u2, c2 * u1);
        let norm = w1 + w2;
        let b = (b1 * w1 + b2 * w2) / norm;
        let u = (c1 + c2) * u1 * u2 / norm;
        let a = (a1 * c1 + a2 * c2) / (c1 + c2);
        (b, u, a)
    };

    finish(Operator::WeightedFusion, b, 1.0 - b - u, u, a)
}
