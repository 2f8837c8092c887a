//! Operator implementations
//!
//! Every operator is a pure function: it borrows its operands, never
//! mutates them, and returns either a fresh valid [`Opinion`] or an
//! [`OpinionError`] naming the operator and the violated condition.

mod addition;
mod complement;
mod discounting;
pub mod experimental;
mod fusion;
mod multiplication;

pub use addition::addition;
pub use complement::complement;
pub use discounting::{
    multi_edge_trust_discounting, trust_discounting, trust_discounting_opposite_belief,
};
pub use fusion::{averaging_fusion, constraint_fusion, cumulative_fusion, weighted_fusion};
pub use multiplication::{comultiplication, multiplication};

use crate::error::{OpinionError, Result};
use crate::operator::Operator;
use crate::tolerance::PRECISION;
use crate::Opinion;

/// Validate an operator's computed tuple
///
/// Coordinates within [`PRECISION`] outside [0, 1] are snapped onto the
/// boundary first, since closed forms such as `1 - b - u` land a rounding
/// step below 0. A tuple that still fails validation is reported as out of
/// domain for `operator`, never returned.
pub(crate) fn finish(operator: Operator, b: f64, d: f64, u: f64, a: f64) -> Result<Opinion> {
    let (b, d, u, a) = (snap(b), snap(d), snap(u), snap(a));
    Opinion::new(b, d, u, a).map_err(|_| {
        let err = OpinionError::OutOfDomain {
            operator,
            reason: format!("({}, {}, {}, {}) is not a valid opinion", b, d, u, a),
        };
        tracing::debug!("{}", err);
        err
    })
}

fn snap(x: f64) -> f64 {
    if x < 0.0 && x > -PRECISION {
        0.0
    } else if x > 1.0 && x < 1.0 + PRECISION {
        1.0
    } else {
        x
    }
}

/// Raise a singularity error for `operator`
pub(crate) fn singularity(operator: Operator, reason: &'static str) -> OpinionError {
    tracing::debug!(operator = %operator, reason, "operator singularity");
    OpinionError::Singularity { operator, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_snaps_rounding_residue() {
        let o = finish(Operator::CumulativeFusion, 0.6, 0.4, -1e-17, 0.5).unwrap();
        assert_eq!(o.uncertainty(), 0.0);
        let o = finish(Operator::CumulativeFusion, 1.0 + 1e-13, 0.0, 0.0, 0.5).unwrap();
        assert_eq!(o.belief(), 1.0);
    }

    #[test]
    fn test_finish_rejects_real_violations() {
        let err = finish(Operator::Addition, 0.6, 0.5, -0.1, 0.5).unwrap_err();
        assert!(matches!(
            err,
            OpinionError::OutOfDomain {
                operator: Operator::Addition,
                ..
            }
        ));
    }
}
