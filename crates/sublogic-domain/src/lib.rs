//! Sublogic Domain Layer
//!
//! Binomial opinions from Subjective Logic and their operator algebra.
//!
//! ## Key Concepts
//!
//! - **Opinion**: (belief, disbelief, uncertainty, base rate) about a binary
//!   proposition; belief + disbelief + uncertainty = 1
//! - **Projected probability**: `belief + uncertainty * base rate`
//! - **Tolerance**: the single "close enough" predicate used for every
//!   comparison of computed opinions
//! - **Operators**: addition, complement, multiplication, comultiplication,
//!   four fusion rules and three trust discounting variants, plus an
//!   experimental impact fusion
//!
//! ## Usage
//!
//! ```
//! use sublogic_domain::{operators, Opinion, Operator};
//!
//! let a = Opinion::new(0.6, 0.3, 0.1, 0.5).unwrap();
//! let b = Opinion::vacuous(0.5).unwrap();
//!
//! let fused = operators::cumulative_fusion(&a, &b).unwrap();
//! // a vacuous opinion adds no evidence
//! assert!(fused.compare(&a));
//!
//! let same = Operator::CumulativeFusion.apply(&[Some(a), Some(b)]).unwrap();
//! assert!(same.compare(&fused));
//! ```
//!
//! Every operator is a pure function; none mutates its operands and none
//! returns a partial result alongside an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod operator;
pub mod operators;
pub mod opinion;
pub mod tolerance;
pub mod traits;

// Re-exports for convenience
pub use error::{OpinionError, Result};
pub use operator::{Arity, Operator};
pub use opinion::{Opinion, OpinionRecord};
pub use tolerance::{compare_optional, Tolerance, PRECISION};
pub use traits::QueryableOpinion;
