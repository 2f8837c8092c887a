//! Provisional operators
//!
//! Nothing in this module is derived from subjective-logic theory or
//! verified against reference values. Other operators must not depend on
//! it, and its behavior may change.

use super::finish;
use crate::error::Result;
use crate::operator::Operator;
use crate::Opinion;

/// Weight of the first operand in [`impact_fusion`]
pub const IMPACT_FACTOR: f64 = 0.8;

/// Impact fusion: fixed linear blend of all four coordinates
///
/// Weights the first operand by [`IMPACT_FACTOR`] and the second by the
/// remainder. Blending the base rate the same way is unverified.
pub fn impact_fusion(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    let (b1, d1, u1, a1) = opinion1.as_tuple();
    let (b2, d2, u2, a2) = opinion2.as_tuple();

    let i1 = IMPACT_FACTOR;
    let i2 = 1.0 - i1;

    finish(
        Operator::ImpactFusion,
        b1 * i1 + b2 * i2,
        d1 * i1 + d2 * i2,
        u1 * i1 + u2 * i2,
        a1 * i1 + a2 * i2,
    )
}
