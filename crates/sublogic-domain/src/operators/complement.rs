use crate::Opinion;

/// Complement: the opinion about NOT x
///
/// Swaps belief and disbelief and inverts the base rate. Total: every valid
/// opinion has a valid complement.
pub fn complement(opinion: &Opinion) -> Opinion {
    Opinion::from_valid_parts(
        opinion.disbelief(),
        opinion.belief(),
        opinion.uncertainty(),
        1.0 - opinion.base_rate(),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::opinion::proptests::valid_tuple;
    use proptest::prelude::*;

    proptest! {
        /// Property: complement is an involution
        #[test]
        fn test_complement_involution((b, d, u, a) in valid_tuple()) {
            let o = Opinion::new(b, d, u, a).unwrap();
            prop_assert!(complement(&complement(&o)).compare(&o));
        }

        /// Property: projected probabilities of x and NOT x sum to 1
        #[test]
        fn test_complement_projected_probability((b, d, u, a) in valid_tuple()) {
            let o = Opinion::new(b, d, u, a).unwrap();
            let sum = o.projected_probability() + complement(&o).projected_probability();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
