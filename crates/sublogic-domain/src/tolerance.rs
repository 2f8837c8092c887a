//! Tolerance policy shared by validation and comparison
//!
//! Every operator accumulates floating-point error, so opinions are never
//! compared exactly. All "close enough" decisions in the crate go through
//! [`Tolerance`].

use crate::Opinion;

/// Maximum per-coordinate deviation for two opinions to count as equal
pub const PRECISION: f64 = 1e-12;

/// Absolute-tolerance equality for opinions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Per-coordinate absolute tolerance (strict bound)
    pub epsilon: f64,
}

impl Tolerance {
    /// Tolerance with the crate-wide [`PRECISION`]
    pub const DEFAULT: Tolerance = Tolerance { epsilon: PRECISION };

    /// Create a tolerance with a custom epsilon
    ///
    /// # Panics
    /// Panics if `epsilon` is not a positive finite number
    pub fn new(epsilon: f64) -> Self {
        assert!(
            epsilon.is_finite() && epsilon > 0.0,
            "Tolerance epsilon must be positive and finite"
        );
        Self { epsilon }
    }

    /// Slack allowed on `belief + disbelief + uncertainty = 1`
    ///
    /// Three summed terms compound rounding, hence three epsilons.
    pub fn sum_slack(&self) -> f64 {
        3.0 * self.epsilon
    }

    /// Whether two scalars differ by strictly less than epsilon
    pub fn close(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.epsilon
    }

    /// Whether all four coordinates of two opinions are close
    pub fn approx_eq(&self, o1: &Opinion, o2: &Opinion) -> bool {
        self.close(o1.belief(), o2.belief())
            && self.close(o1.disbelief(), o2.disbelief())
            && self.close(o1.uncertainty(), o2.uncertainty())
            && self.close(o1.base_rate(), o2.base_rate())
    }

    /// Compare possibly absent opinions
    ///
    /// Two absent opinions are equal; absent versus present is unequal in
    /// either order.
    pub fn approx_eq_optional(&self, o1: Option<&Opinion>, o2: Option<&Opinion>) -> bool {
        match (o1, o2) {
            (None, None) => true,
            (Some(a), Some(b)) => self.approx_eq(a, b),
            _ => false,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Compare possibly absent opinions with the default tolerance
pub fn compare_optional(o1: Option<&Opinion>, o2: Option<&Opinion>) -> bool {
    Tolerance::DEFAULT.approx_eq_optional(o1, o2)
}
