//! List command implementation
//!
//! Prints the registered test functions, optionally filtered by tag.

use std::io::Write;
use tracing::info;
use uqtf_functions::{create_function, list_functions, TestFunction};

use crate::Result;

/// Run the list command
pub fn run<W: Write>(tag: Option<&str>, out: &mut W) -> Result<()> {
    info!("Listing test functions (tag: {})", tag.unwrap_or("any"));

    writeln!(
        out,
        "{:<22} {:>5}  {:<20} {}",
        "Name", "Dim", "Default input", "Tags"
    )?;

    let mut shown = 0;
    for name in list_functions() {
        let function = create_function(name, None, None)?;
        let matches_tag = tag.map_or(true, |wanted| {
            function
                .tags()
                .iter()
                .any(|t| t.eq_ignore_ascii_case(wanted.trim()))
        });
        if !matches_tag {
            continue;
        }
        writeln!(
            out,
            "{:<22} {:>5}  {:<20} {}",
            function.name(),
            function.spatial_dimension(),
            function.default_input(),
            function.tags().join(", ")
        )?;
        shown += 1;
    }

    info!("{} function(s) listed", shown);
    Ok(())
}
