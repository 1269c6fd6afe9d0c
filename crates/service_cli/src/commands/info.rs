//! Info command implementation
//!
//! Describes a test function and its selected probabilistic input.

use std::io::Write;
use tracing::info;
use uqtf_functions::{create_function, TestFunction};

use crate::Result;

/// Run the info command
pub fn run<W: Write>(
    function: &str,
    dimension: Option<usize>,
    input: Option<&str>,
    out: &mut W,
) -> Result<()> {
    info!("Describing test function {}", function);

    let function = create_function(function, dimension, input)?;
    let prob_input = function.prob_input(None)?;

    writeln!(out, "{}", function)?;
    writeln!(out, "Tags              : {}", function.tags().join(", "))?;
    writeln!(
        out,
        "Available inputs  : {}",
        function.available_inputs().join(", ")
    )?;
    writeln!(out)?;
    writeln!(out, "{}", prob_input)?;
    Ok(())
}
