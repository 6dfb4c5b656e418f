// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Credential lookup error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Store location cannot be resolved
    #[error("config error: {message}")]
    Config { message: String },

    /// Store file I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Malformed store line (1-based line number).
    #[error("parse error: line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Failed to read the query from the input stream.
    #[error("input error: {0}")]
    Input(#[source] std::io::Error),

    /// Failed to write the response to the output stream.
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type using credlookup Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Credential printed, or no-op sub-command
    Success = 0,
    /// Query matched nothing in the store
    NoMatch = 1,
    /// Usage or configuration error
    ConfigError = 2,
    /// Store could not be read or parsed
    StoreError = 3,
    /// Protocol stream failure or other unexpected error
    InternalError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::FileTooLarge { .. } => ExitCode::StoreError,
            Error::Parse { .. } => ExitCode::StoreError,
            Error::Input(_) | Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
