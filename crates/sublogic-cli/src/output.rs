//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use sublogic_domain::{Operator, Opinion, OpinionRecord};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// JSON shape of a reported opinion: the interchange record plus its
/// projected probability.
#[derive(Serialize)]
struct OpinionReport {
    #[serde(flatten)]
    record: OpinionRecord,
    projected_probability: f64,
}

#[derive(Serialize)]
struct OperatorEntry {
    name: &'static str,
    arity: String,
    experimental: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an opinion with its projected probability.
    pub fn format_opinion(&self, opinion: &Opinion) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report = OpinionReport {
                    record: opinion.to_record(),
                    projected_probability: opinion.projected_probability(),
                };
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Table => Ok(self.format_opinion_table(opinion)),
            OutputFormat::Quiet => Ok(opinion.to_string()),
        }
    }

    fn format_opinion_table(&self, opinion: &Opinion) -> String {
        let mut builder = Builder::default();
        builder.push_record([
            "Belief",
            "Disbelief",
            "Uncertainty",
            "Base rate",
            "Projected",
        ]);
        builder.push_record([
            format_value(opinion.belief()),
            format_value(opinion.disbelief()),
            format_value(opinion.uncertainty()),
            format_value(opinion.base_rate()),
            format_value(opinion.projected_probability()),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the outcome of a comparison.
    pub fn format_comparison(&self, equal: bool, epsilon: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "equal": equal,
                "epsilon": epsilon,
            }))?),
            OutputFormat::Table => {
                if equal {
                    Ok(self.success(&format!("Opinions are equal (epsilon {:e})", epsilon)))
                } else {
                    Ok(self.warning(&format!("Opinions differ (epsilon {:e})", epsilon)))
                }
            }
            OutputFormat::Quiet => Ok(equal.to_string()),
        }
    }

    /// Format the operator listing.
    pub fn format_operators(&self, operators: &[Operator]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<OperatorEntry> = operators
                    .iter()
                    .map(|op| OperatorEntry {
                        name: op.name(),
                        arity: op.arity().to_string(),
                        experimental: op.is_experimental(),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Operator", "Operands", "Status"]);
                for op in operators {
                    let status = if op.is_experimental() {
                        self.colorize("experimental", "yellow")
                    } else {
                        String::new()
                    };
                    builder.push_record([op.name().to_string(), op.arity().to_string(), status]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let names: Vec<&str> = operators.iter().map(Operator::name).collect();
                Ok(names.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_value(x: f64) -> String {
    format!("{:.6}", x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_opinion() -> Opinion {
        Opinion::new(0.6, 0.3, 0.1, 0.5).unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_opinion(&create_test_opinion()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["belief"], serde_json::json!(0.6));
        assert_eq!(value["base_rate"], serde_json::json!(0.5));
        let projected = value["projected_probability"].as_f64().unwrap();
        assert!((projected - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_json_output_is_an_interchange_record() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_opinion(&create_test_opinion()).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&output).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .remove("projected_probability");
        let back: Opinion = serde_json::from_value(value).unwrap();
        assert!(back.compare(&create_test_opinion()));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_opinion(&create_test_opinion()).unwrap();
        assert_eq!(output, "0.6, 0.3, 0.1, 0.5");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_opinion(&create_test_opinion()).unwrap();
        assert!(output.contains("Uncertainty"));
        assert!(output.contains("Projected"));
        assert!(output.contains("0.650000"));
    }

    #[test]
    fn test_comparison_formats() {
        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_comparison(true, 1e-12).unwrap(), "true");
        assert_eq!(quiet.format_comparison(false, 1e-12).unwrap(), "false");

        let table = Formatter::new(OutputFormat::Table, false);
        assert!(table
            .format_comparison(true, 1e-12)
            .unwrap()
            .contains("equal"));

        let json = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&json.format_comparison(false, 1e-6).unwrap()).unwrap();
        assert_eq!(value["equal"], serde_json::json!(false));
    }

    #[test]
    fn test_operator_listing() {
        let quiet = Formatter::new(OutputFormat::Quiet, false);
        let output = quiet.format_operators(&Operator::ALL).unwrap();
        assert_eq!(output.lines().count(), Operator::ALL.len());
        assert!(output.lines().any(|l| l == "multi-edge-trust-discounting"));

        let table = Formatter::new(OutputFormat::Table, false);
        let output = table.format_operators(&Operator::ALL).unwrap();
        assert!(output.contains("impact-fusion"));
        assert!(output.contains("experimental"));
        assert!(output.contains("at least 2"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
