use super::{finish, singularity};
use crate::error::{OpinionError, Result};
use crate::operator::Operator;
use crate::tolerance::PRECISION;
use crate::Opinion;

const OP: Operator = Operator::Addition;

/// Addition: opinion about the union of two disjoint propositions
///
/// Belief and base rate add; disbelief and uncertainty are averaged with
/// the base rates as weights. Fails if both base rates are 0 (no weights),
/// or if the summed belief or base rate exceeds 1, or if the weighted
/// disbelief turns negative. No clamped result is returned in any of these
/// cases. Overshoots within [`PRECISION`] are rounding residue, not
/// violations.
pub fn addition(opinion1: &Opinion, opinion2: &Opinion) -> Result<Opinion> {
    let (b1, d1, u1, a1) = opinion1.as_tuple();
    let (b2, d2, u2, a2) = opinion2.as_tuple();

    if a1 == 0.0 && a2 == 0.0 {
        return Err(singularity(OP, "base rates cannot both be 0"));
    }

    let b = b1 + b2;
    let a = a1 + a2;
    if b > 1.0 + PRECISION {
        return Err(out_of_domain(format!("belief sum {} exceeds 1", b)));
    }
    if a > 1.0 + PRECISION {
        return Err(out_of_domain(format!("base rate sum {} exceeds 1", a)));
    }

    let d = (a1 * (d1 - b2) + a2 * (d2 - b1)) / a;
    let u = (a1 * u1 + a2 * u2) / a;
    if d < -PRECISION {
        return Err(out_of_domain(format!("disbelief {} is negative", d)));
    }

    finish(OP, b, d, u, a)
}

fn out_of_domain(reason: String) -> OpinionError {
    let err = OpinionError::OutOfDomain {
        operator: OP,
        reason,
    };
    tracing::debug!("{}", err);
    err
}
