//! Binomial opinion value object
//!
//! An opinion is a (belief, disbelief, uncertainty, base rate) tuple about a
//! binary proposition. Belief, disbelief and uncertainty lie in [0, 1] and
//! sum to 1; the base rate lies in [0, 1] independently. An [`Opinion`]
//! that exists is always valid: the constructor, [`Opinion::modify`] and
//! deserialization all run the same validation.

use crate::error::{OpinionError, Result};
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A valid binomial opinion
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "OpinionRecord")]
pub struct Opinion {
    belief: f64,
    disbelief: f64,
    uncertainty: f64,
    base_rate: f64,
}

impl Opinion {
    /// Create a new opinion, validating all four coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_domain::Opinion;
    ///
    /// let o = Opinion::new(0.6, 0.3, 0.1, 0.5).unwrap();
    /// assert!((o.projected_probability() - 0.65).abs() < 1e-12);
    ///
    /// assert!(Opinion::new(0.6, 0.3, 0.3, 0.5).is_err());
    /// ```
    pub fn new(belief: f64, disbelief: f64, uncertainty: f64, base_rate: f64) -> Result<Self> {
        check_input(belief, disbelief, uncertainty, base_rate)?;
        Ok(Self {
            belief,
            disbelief,
            uncertainty,
            base_rate,
        })
    }

    /// Build from coordinates already known to be valid
    pub(crate) fn from_valid_parts(
        belief: f64,
        disbelief: f64,
        uncertainty: f64,
        base_rate: f64,
    ) -> Self {
        debug_assert!(check_input(belief, disbelief, uncertainty, base_rate).is_ok());
        Self {
            belief,
            disbelief,
            uncertainty,
            base_rate,
        }
    }

    /// Fully uncertain opinion (0, 0, 1, a)
    pub fn vacuous(base_rate: f64) -> Result<Self> {
        Self::new(0.0, 0.0, 1.0, base_rate)
    }

    /// Fully certain opinion (b, 1 - b, 0, a)
    pub fn dogmatic(belief: f64, base_rate: f64) -> Result<Self> {
        Self::new(belief, 1.0 - belief, 0.0, base_rate)
    }

    /// Belief mass
    pub fn belief(&self) -> f64 {
        self.belief
    }

    /// Disbelief mass
    pub fn disbelief(&self) -> f64 {
        self.disbelief
    }

    /// Uncertainty mass
    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Prior probability in the absence of evidence
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Replace all four coordinates in place
    ///
    /// All-or-nothing: if the new values are invalid, `self` is unchanged.
    pub fn modify(
        &mut self,
        belief: f64,
        disbelief: f64,
        uncertainty: f64,
        base_rate: f64,
    ) -> Result<()> {
        *self = Self::new(belief, disbelief, uncertainty, base_rate)?;
        Ok(())
    }

    /// Projected probability `b + u * a`
    pub fn projected_probability(&self) -> f64 {
        self.belief + self.uncertainty * self.base_rate
    }

    /// Tolerance equality with the default [`crate::PRECISION`]
    pub fn compare(&self, other: &Opinion) -> bool {
        Tolerance::DEFAULT.approx_eq(self, other)
    }

    /// Interchange record for this opinion
    pub fn to_record(&self) -> OpinionRecord {
        OpinionRecord::from(*self)
    }

    /// The four coordinates as a tuple (b, d, u, a)
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.belief, self.disbelief, self.uncertainty, self.base_rate)
    }
}

impl fmt::Display for Opinion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.belief, self.disbelief, self.uncertainty, self.base_rate
        )
    }
}

impl FromStr for Opinion {
    type Err = OpinionError;

    /// Parse `"b, d, u, a"` (the [`fmt::Display`] form)
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(OpinionError::Parse(format!(
                "expected 4 comma-separated values, got {}",
                parts.len()
            )));
        }

        let mut values = [0.0_f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|e| OpinionError::Parse(format!("'{}': {}", part, e)))?;
        }

        Self::new(values[0], values[1], values[2], values[3])
    }
}

/// Interchange form of an opinion
///
/// Field names are fixed: `belief`, `disbelief`, `uncertainty`,
/// `base_rate`. Converting a record into an [`Opinion`] validates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpinionRecord {
    /// Belief mass
    pub belief: f64,
    /// Disbelief mass
    pub disbelief: f64,
    /// Uncertainty mass
    pub uncertainty: f64,
    /// Base rate
    pub base_rate: f64,
}

impl From<Opinion> for OpinionRecord {
    fn from(o: Opinion) -> Self {
        Self {
            belief: o.belief,
            disbelief: o.disbelief,
            uncertainty: o.uncertainty,
            base_rate: o.base_rate,
        }
    }
}

impl TryFrom<OpinionRecord> for Opinion {
    type Error = OpinionError;

    fn try_from(r: OpinionRecord) -> Result<Self> {
        Opinion::new(r.belief, r.disbelief, r.uncertainty, r.base_rate)
    }
}

fn in_unit_interval(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

/// Validate a coordinate tuple
fn check_input(b: f64, d: f64, u: f64, a: f64) -> Result<()> {
    let slack = Tolerance::DEFAULT.sum_slack();
    if (1.0 - (b + d + u)).abs() < slack
        && in_unit_interval(b)
        && in_unit_interval(d)
        && in_unit_interval(u)
        && in_unit_interval(a)
    {
        Ok(())
    } else {
        Err(OpinionError::InvalidOpinion {
            belief: b,
            disbelief: d,
            uncertainty: u,
            base_rate: a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opinion_creation() {
        let o = Opinion::new(0.091, 0.604, 0.305, 0.4).unwrap();
        assert_eq!(o.belief(), 0.091);
        assert_eq!(o.disbelief(), 0.604);
        assert_eq!(o.uncertainty(), 0.305);
        assert_eq!(o.base_rate(), 0.4);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        // sum != 1
        assert!(Opinion::new(0.5, 0.5, 0.5, 0.5).is_err());
        assert!(Opinion::new(0.1, 0.1, 0.1, 0.5).is_err());
        // out of range
        assert!(Opinion::new(1.2, -0.2, 0.0, 0.5).is_err());
        assert!(Opinion::new(0.5, 0.5, 0.0, 1.5).is_err());
        assert!(Opinion::new(0.5, 0.5, 0.0, -0.1).is_err());
        // null opinion
        assert!(Opinion::new(0.0, 0.0, 0.0, 0.0).is_err());
        // NaN
        assert!(Opinion::new(f64::NAN, 0.5, 0.5, 0.5).is_err());
        assert!(Opinion::new(0.5, 0.5, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_sum_tolerance() {
        assert!(Opinion::new(0.004, 0.5950000001, 0.4009999999, 0.00000000004334).is_ok());
        assert!(Opinion::new(0.0, 0.999999999999999, 0.000000000000001, 0.5).is_ok());
        // within 3 * PRECISION
        assert!(Opinion::new(0.5, 0.5 + 2e-12, 0.0, 0.5).is_ok());
        // beyond it
        assert!(Opinion::new(0.5, 0.5 + 4e-12, 0.0, 0.5).is_err());
    }

    #[test]
    fn test_modify_valid() {
        let mut o = Opinion::new(1.0, 0.0, 0.0, 0.5).unwrap();
        o.modify(0.2, 0.3, 0.5, 0.1).unwrap();
        assert!(o.compare(&Opinion::new(0.2, 0.3, 0.5, 0.1).unwrap()));
    }

    #[test]
    fn test_modify_invalid_leaves_opinion_unchanged() {
        let mut o = Opinion::new(0.6, 0.3, 0.1, 0.0).unwrap();
        let before = o;
        let err = o.modify(0.6, 0.3, 0.3, 0.0).unwrap_err();
        assert!(matches!(err, OpinionError::InvalidOpinion { .. }));
        assert!(o.compare(&before));
    }

    #[test]
    fn test_projected_probability() {
        let o = Opinion::new(0.091, 0.604, 0.305, 0.4).unwrap();
        assert!((o.projected_probability() - 0.213).abs() < 1e-12);
        let vacuous = Opinion::vacuous(0.3).unwrap();
        assert!((vacuous.projected_probability() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_vacuous_and_dogmatic() {
        let v = Opinion::vacuous(0.5).unwrap();
        assert_eq!(v.as_tuple(), (0.0, 0.0, 1.0, 0.5));
        let d = Opinion::dogmatic(0.7, 0.2).unwrap();
        assert!(d.compare(&Opinion::new(0.7, 0.3, 0.0, 0.2).unwrap()));
        assert!(Opinion::dogmatic(1.5, 0.5).is_err());
        assert!(Opinion::vacuous(2.0).is_err());
    }

    #[test]
    fn test_display() {
        let o = Opinion::new(0.6, 0.3, 0.1, 0.0).unwrap();
        assert_eq!(o.to_string(), "0.6, 0.3, 0.1, 0");
    }

    #[test]
    fn test_parse() {
        let o: Opinion = "0.6, 0.3, 0.1, 0".parse().unwrap();
        assert!(o.compare(&Opinion::new(0.6, 0.3, 0.1, 0.0).unwrap()));

        let o: Opinion = "1,0,0,0.5".parse().unwrap();
        assert_eq!(o.belief(), 1.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "0.5, 0.5, 0".parse::<Opinion>(),
            Err(OpinionError::Parse(_))
        ));
        assert!(matches!(
            "0.5, x, 0, 0.5".parse::<Opinion>(),
            Err(OpinionError::Parse(_))
        ));
        assert!(matches!(
            "0.5, 0.5, 0.5, 0.5".parse::<Opinion>(),
            Err(OpinionError::InvalidOpinion { .. })
        ));
    }

    #[test]
    fn test_record_conversion() {
        let o = Opinion::new(0.53, 0.227, 0.243, 1.0).unwrap();
        let record = o.to_record();
        assert_eq!(record.base_rate, 1.0);
        let back = Opinion::try_from(record).unwrap();
        assert!(back.compare(&o));

        let bad = OpinionRecord {
            belief: 0.9,
            disbelief: 0.9,
            uncertainty: 0.0,
            base_rate: 0.5,
        };
        assert!(Opinion::try_from(bad).is_err());
    }
}
