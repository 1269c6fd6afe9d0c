//! Sample command implementation
//!
//! Draws realisations from a test function's input and writes them as CSV.

use ndarray::Array2;
use std::io::Write;
use tracing::info;
use uqtf_core::prob_input::ProbInput;
use uqtf_functions::{create_function, TestFunction};

use super::output::write_csv;
use super::parse_count;
use crate::config::CliConfig;
use crate::Result;

/// Options shared by the sample and evaluate commands
#[derive(Debug, Clone, Default)]
pub struct SampleArgs {
    /// Test function name
    pub function: String,
    /// Requested dimension
    pub dimension: Option<usize>,
    /// Input selection
    pub input: Option<String>,
    /// Sample size as typed; the configured default when absent
    pub size: Option<String>,
}

pub(crate) fn column_headers(input: &ProbInput) -> Vec<String> {
    input
        .marginals()
        .iter()
        .enumerate()
        .map(|(j, marginal)| {
            marginal
                .name()
                .map_or_else(|| format!("X{}", j + 1), str::to_string)
        })
        .collect()
}

/// Build the function's input and draw the requested sample.
pub(crate) fn draw(
    args: &SampleArgs,
    config: &CliConfig,
) -> Result<(uqtf_functions::AnyTestFunction, ProbInput, Array2<f64>)> {
    let size = match &args.size {
        Some(text) => parse_count(text)?,
        None => config.sample_size,
    };
    let function = create_function(&args.function, args.dimension, args.input.as_deref())?;
    let mut input = function.prob_input(config.seed)?;

    info!(
        function = function.name(),
        input = function.input_selection(),
        size,
        seed = ?config.seed,
        "sampling"
    );
    let xx = input.get_sample(size)?;
    Ok((function, input, xx))
}

/// Run the sample command
pub fn run<W: Write>(args: &SampleArgs, config: &CliConfig, out: W) -> Result<()> {
    let (_, input, xx) = draw(args, config)?;
    write_csv(out, &column_headers(&input), xx.view(), None, config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CliConfig {
        CliConfig {
            seed: Some(42),
            ..Default::default()
        }
    }

    fn sample_text(args: &SampleArgs, config: &CliConfig) -> String {
        let mut buffer = Vec::new();
        run(args, config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let args = SampleArgs {
            function: "OTLCircuit".to_string(),
            size: Some("5".to_string()),
            ..Default::default()
        };
        let text = sample_text(&args, &seeded());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Rb1,Rb2,Rf,Rc1,Rc2,beta"));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let args = SampleArgs {
            function: "McLainS2".to_string(),
            size: Some("8".to_string()),
            ..Default::default()
        };
        assert_eq!(sample_text(&args, &seeded()), sample_text(&args, &seeded()));
    }

    #[test]
    fn test_default_size_from_config() {
        let args = SampleArgs {
            function: "HolsclawSine".to_string(),
            ..Default::default()
        };
        let config = CliConfig {
            sample_size: 3,
            ..seeded()
        };
        assert_eq!(sample_text(&args, &config).lines().count(), 4);
    }

    #[test]
    fn test_negative_size_rejected() {
        let args = SampleArgs {
            function: "HolsclawSine".to_string(),
            size: Some("-1".to_string()),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        assert!(run(&args, &seeded(), &mut buffer).is_err());
    }
}
