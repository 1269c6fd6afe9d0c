//! Meta command implementation
//!
//! Draws test functions from the default metafunction and describes them.

use std::io::Write;
use tracing::info;
use uqtf_functions::meta::MetaFunction;
use uqtf_functions::TestFunction;

use crate::Result;

/// Run the meta command
pub fn run<W: Write>(
    dimension: usize,
    input_id: Option<usize>,
    count: usize,
    seed: Option<u64>,
    out: &mut W,
) -> Result<()> {
    info!("Drawing {} metafunction realization(s) of dimension {}", count, dimension);

    let mut meta = MetaFunction::from_default(dimension, input_id, seed)?;
    for (k, realization) in meta.get_sample(count)?.iter().enumerate() {
        if k > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Realization {}", k + 1)?;
        writeln!(out, "{}", realization)?;
        for (j, (basis, marginal)) in realization
            .basis()
            .iter()
            .zip(realization.marginals())
            .enumerate()
        {
            writeln!(out, "  X{:<4} {:<14} {}", j + 1, basis, marginal)?;
        }
        for term in realization.terms() {
            let inputs: Vec<String> = term.indices.iter().map(|j| format!("X{}", j + 1)).collect();
            writeln!(out, "  {:>+12.6} * {}", term.coefficient, inputs.join(" * "))?;
        }
    }
    Ok(())
}
