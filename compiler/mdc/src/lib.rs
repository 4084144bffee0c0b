//! Markdown lexer inspector.
//!
//! Library half of the `mdc` binary: command handlers return their output
//! as a `String` so they can be tested without a process.

pub mod commands;
mod error;

pub use error::CliError;

use std::sync::Once;

use commands::{lex_file, parse_file};

static TRACING_INIT: Once = Once::new();

/// Usage text printed by `mdc help` and after argument errors.
pub const USAGE: &str = "\
Usage: mdc <command> <file.md>

Commands:
  lex <file>     Show the token stream
  parse <file>   Show the tag tree
  help           Show this message

Set RUST_LOG (e.g. RUST_LOG=md_lexer_core=trace) for tracing output.
";

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=md_lexer_core=trace`
/// or `RUST_LOG=md_parse=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}

/// Dispatch a command line (without the program name) and return the text
/// to print on stdout.
///
/// No arguments and `help` both produce [`USAGE`].
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<String, CliError> {
    let Some(command) = args.first().map(S::as_ref) else {
        return Ok(USAGE.to_string());
    };
    let path = args.get(1).map(S::as_ref);
    tracing::debug!(command, ?path, "dispatch");

    match command {
        "lex" => lex_file(require_path(command, path)?),
        "parse" => parse_file(require_path(command, path)?),
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn require_path<'a>(command: &str, path: Option<&'a str>) -> Result<&'a str, CliError> {
    path.ok_or_else(|| CliError::MissingPath {
        command: command.to_string(),
    })
}
