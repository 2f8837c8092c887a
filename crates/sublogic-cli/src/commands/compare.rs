//! Compare command implementation.

use super::parse_operand;
use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use sublogic_domain::Tolerance;

/// Execute the compare command.
pub fn execute_compare(
    args: CompareArgs,
    tolerance: &Tolerance,
    formatter: &Formatter,
) -> Result<()> {
    let equal = compare(&args, tolerance)?;
    println!("{}", formatter.format_comparison(equal, tolerance.epsilon)?);
    Ok(())
}

/// Two absent operands are equal; one absent operand never is.
fn compare(args: &CompareArgs, tolerance: &Tolerance) -> Result<bool> {
    let first = parse_operand(&args.first)?;
    let second = parse_operand(&args.second)?;
    Ok(tolerance.approx_eq_optional(first.as_ref(), second.as_ref()))
}
