use super::{finish, singularity};
use crate::error::Result;
use crate::operator::Operator;
use crate::tolerance::PRECISION;
use crate::Opinion;

/// Multiplication: opinion about x AND y for independent propositions
///
/// Uncertainty is redistributed with the weighting term `1 - a1 * a2`,
/// which vanishes when both base rates are 1; that case fails.
pub fn multiplication(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    const OP: Operator = Operator::Multiplication;

    let (b1, d1, u1, a1) = opinion1.as_tuple();
    let (b2, d2, u2, a2) = opinion2.as_tuple();

    let norm = 1.0 - a1 * a2;
    if norm < PRECISION {
        return Err(singularity(OP, "base rates cannot both be 1"));
    }

    let b = b1 * b2 + ((1.0 - a1) * a2 * b1 * u2 + a1 * (1.0 - a2) * u1 * b2) / norm;
    let d = d1 + d2 - d1 * d2;
    let u = u1 * u2 + ((1.0 - a2) * b1 * u2 + (1.0 - a1) * u1 * b2) / norm;
    let a = a1 * a2;

    finish(OP, b, d, u, a)
}

/// Comultiplication: opinion about x OR y for independent propositions
///
/// Dual of [`multiplication`]. The weighting term `a1 + a2 - a1 * a2`
/// vanishes when both base rates are 0, and by duality with multiplication
/// both base rates equal to 1 is rejected as well.
pub fn comultiplication(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    const OP: Operator = Operator::Comultiplication;

    let (b1, d1, u1, a1) = opinion1.as_tuple();
    let (b2, d2, u2, a2) = opinion2.as_tuple();

    if 1.0 - a1 * a2 < PRECISION {
        return Err(singularity(OP, "base rates cannot both be 1"));
    }
    let norm = a1 + a2 - a1 * a2;
    if norm < PRECISION {
        return Err(singularity(OP, "base rates cannot both be 0"));
    }

    let b = b1 + b2 - b1 * b2;
    let d = d1 * d2 + (a1 * (1.0 - a2) * d1 * u2 + (1.0 - a1) * a2 * u1 * d2) / norm;
    let u = u1 * u2 + (a2 * d1 * u2 + a1 * u1 * d2) / norm;
    let a = norm;

    finish(OP, b, d, u, a)
}
