//! Command handlers for the `mdc` CLI.
//!
//! Each handler reads its input file and returns the text to print.

use tracing::debug;

use crate::CliError;

mod debug;

pub use debug::{format_tags, format_tokens, lex_file, parse_file};

/// Read a markdown file, mapping I/O failures to readable messages.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))?;
    debug!(path, bytes = content.len(), "read input");
    Ok(content)
}
