//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; logs go to stderr.

pub mod dist;
pub mod evaluate;
pub mod info;
pub mod list;
pub mod meta;
pub mod sample;

mod output;

use crate::{CliError, Result};

/// Parse a textual sample size.
pub(crate) fn parse_count(text: &str) -> Result<usize> {
    text.trim().parse().map_err(|_| {
        CliError::InvalidArgument(format!(
            "sample size must be a non-negative integer, got '{}'",
            text
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("25").unwrap(), 25);
        assert_eq!(parse_count("0").unwrap(), 0);
        assert!(matches!(parse_count("-3"), Err(CliError::InvalidArgument(_))));
        assert!(matches!(parse_count("ten"), Err(CliError::InvalidArgument(_))));
    }
}
