//! Evaluate command implementation
//!
//! Samples a test function's input, evaluates the function and writes the
//! inputs together with the output column `Y` as CSV.

use std::io::Write;
use tracing::info;
use uqtf_functions::TestFunction;

use super::output::write_csv;
use super::sample::{column_headers, draw, SampleArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the evaluate command
pub fn run<W: Write>(args: &SampleArgs, parallel: bool, config: &CliConfig, out: W) -> Result<()> {
    let (function, input, xx) = draw(args, config)?;

    let use_parallel = parallel || xx.nrows() >= config.parallel_threshold;
    info!(rows = xx.nrows(), parallel = use_parallel, "evaluating {}", function.name());
    let yy = if use_parallel {
        function.evaluate_parallel(xx.view())?
    } else {
        function.evaluate(xx.view())?
    };

    let mut headers = column_headers(&input);
    headers.push("Y".to_string());
    write_csv(out, &headers, xx.view(), Some(yy.view()), config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_text(parallel: bool, threshold: usize) -> String {
        let args = SampleArgs {
            function: "Forrester2008".to_string(),
            size: Some("16".to_string()),
            ..Default::default()
        };
        let config = CliConfig {
            seed: Some(1),
            parallel_threshold: threshold,
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run(&args, parallel, &config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_output_column() {
        let text = evaluate_text(false, 1000);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,Y"));
        for line in lines {
            let fields: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
            let x = fields[0];
            let expected = (6.0 * x - 2.0).powi(2) * (12.0 * x - 4.0).sin();
            approx::assert_relative_eq!(fields[1], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parallel_output_identical() {
        assert_eq!(evaluate_text(false, 1000), evaluate_text(true, 1000));
        assert_eq!(evaluate_text(false, 1000), evaluate_text(false, 1));
    }
}
