//! CLI error type.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing <file> argument for '{command}'")]
    MissingPath { command: String },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl CliError {
    /// Errors caused by the command line itself rather than the input file.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CliError::MissingPath { .. } | CliError::UnknownCommand(_)
        )
    }

    /// Map a failed read of `path` to the most specific message.
    pub(crate) fn from_read(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source },
        }
    }
}
