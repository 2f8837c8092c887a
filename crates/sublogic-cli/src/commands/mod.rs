//! Command implementations.

pub mod apply;
pub mod check;
pub mod compare;
pub mod config;
pub mod operators;

pub use self::apply::execute_apply;
pub use self::check::execute_check;
pub use self::compare::execute_compare;
pub use self::config::execute_config;
pub use self::operators::execute_operators;

use crate::error::Result;
use sublogic_domain::Opinion;

/// Parse a command-line operand: `none` is an absent opinion, anything
/// else must be a valid `b,d,u,a` opinion.
pub fn parse_operand(text: &str) -> Result<Option<Opinion>> {
    if text.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(Some(text.parse()?))
}
