//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use sublogic_domain::Opinion;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<()> {
    let opinion: Opinion = args.opinion.parse()?;
    println!("{}", formatter.format_opinion(&opinion)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_check_valid_opinion() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = CheckArgs {
            opinion: "0, 0, 1, 0.5".to_string(),
        };
        assert!(execute_check(args, &formatter).is_ok());
    }

    #[test]
    fn test_check_rejects_null_opinion() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = CheckArgs {
            opinion: "0,0,0,0".to_string(),
        };
        assert!(execute_check(args, &formatter).is_err());
    }
}
