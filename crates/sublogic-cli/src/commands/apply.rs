//! Apply command implementation.

use super::parse_operand;
use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::io::{self, Read};
use sublogic_domain::{Operator, Opinion};

/// Execute the apply command.
pub fn execute_apply(args: ApplyArgs, formatter: &Formatter) -> Result<()> {
    let operator: Operator = args.operator.parse()?;
    if operator.is_experimental() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} is experimental and unverified", operator))
        );
    }

    let operands = match &args.file {
        Some(path) => read_operands(&read_input(path)?)?,
        None => args
            .opinions
            .iter()
            .map(|text| parse_operand(text))
            .collect::<Result<Vec<_>>>()?,
    };
    tracing::debug!(operator = %operator, operands = operands.len(), "applying operator");

    let result = operator.apply(&operands)?;
    println!("{}", formatter.format_opinion(&result)?);
    Ok(())
}

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse a JSON array of opinion records; `null` entries are absent
/// operands.
fn read_operands(json: &str) -> Result<Vec<Option<Opinion>>> {
    let operands: Vec<Option<Opinion>> = serde_json::from_str(json)?;
    if operands.is_empty() {
        return Err(CliError::InvalidInput("No opinions provided".to_string()));
    }
    Ok(operands)
}
