//! Trait definitions for interoperability
//!
//! Other subjective-logic implementations can expose their opinions through
//! [`QueryableOpinion`] and be converted into this crate's [`Opinion`].

use crate::error::Result;
use crate::Opinion;

/// Read-only view of a binomial opinion
pub trait QueryableOpinion {
    /// Belief mass
    fn belief(&self) -> f64;

    /// Disbelief mass
    fn disbelief(&self) -> f64;

    /// Uncertainty mass
    fn uncertainty(&self) -> f64;

    /// Base rate
    fn base_rate(&self) -> f64;

    /// Projected probability `b + u * a`
    fn projected_probability(&self) -> f64 {
        self.belief() + self.uncertainty() * self.base_rate()
    }

    /// Validate this view into an owned [`Opinion`]
    fn to_opinion(&self) -> Result<Opinion> {
        Opinion::new(
            self.belief(),
            self.disbelief(),
            self.uncertainty(),
            self.base_rate(),
        )
    }
}

impl QueryableOpinion for Opinion {
    fn belief(&self) -> f64 {
        Opinion::belief(self)
    }

    fn disbelief(&self) -> f64 {
        Opinion::disbelief(self)
    }

    fn uncertainty(&self) -> f64 {
        Opinion::uncertainty(self)
    }

    fn base_rate(&self) -> f64 {
        Opinion::base_rate(self)
    }
}
