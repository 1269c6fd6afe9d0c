//! Dist command implementation
//!
//! Evaluates the pdf, cdf or icdf of a single distribution at values given
//! on the command line.

use clap::ValueEnum;
use std::io::Write;
use tracing::info;
use uqtf_core::prob_input::{parse_values, Marginal};

use super::output::format_value;
use crate::Result;

/// Distribution function to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistOp {
    /// Probability density
    Pdf,
    /// Cumulative distribution
    Cdf,
    /// Quantile (inverse cdf)
    Icdf,
}

/// Run the dist command
pub fn run<W: Write>(
    family: &str,
    params: &[f64],
    op: DistOp,
    values: &[String],
    precision: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let marginal = Marginal::new(family, params)?;
    info!("{:?} of {}", op, marginal);

    let xs = parse_values(values)?;
    let results = match op {
        DistOp::Pdf => marginal.pdf(&xs),
        DistOp::Cdf => marginal.cdf(&xs),
        DistOp::Icdf => marginal.icdf(&xs)?,
    };

    for value in results {
        writeln!(out, "{}", format_value(value, precision))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use uqtf_core::types::UqError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_exponential_cdf() {
        let mut buffer = Vec::new();
        run("exponential", &[2.0], DistOp::Cdf, &strings(&["0", "inf"]), None, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0\n1\n");
    }

    #[test]
    fn test_icdf_precision() {
        let mut buffer = Vec::new();
        run("exponential", &[2.0], DistOp::Icdf, &strings(&["0.5"]), Some(4), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0.3466\n");
    }

    #[test]
    fn test_non_numeric_value() {
        let mut buffer = Vec::new();
        let err = run("uniform", &[0.0, 1.0], DistOp::Pdf, &strings(&["two"]), None, &mut buffer)
            .unwrap_err();
        assert!(matches!(err, CliError::Core(UqError::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_range_probability() {
        let mut buffer = Vec::new();
        let err = run("gumbel", &[0.0, 1.0], DistOp::Icdf, &strings(&["1.5"]), None, &mut buffer)
            .unwrap_err();
        assert!(matches!(err, CliError::Core(UqError::Domain { .. })));
    }
}
