//! Operators command implementation.

use crate::error::Result;
use crate::output::Formatter;
use sublogic_domain::Operator;

/// Execute the operators command.
pub fn execute_operators(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_operators(&Operator::ALL)?);
    Ok(())
}
