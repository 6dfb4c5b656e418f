// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `get` sub-command.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Error, ExitCode, Result};
use crate::matcher;
use crate::protocol::{Attributes, HOST, PROTOCOL};
use crate::store;

/// Run `get` against the process's stdin and stdout.
pub fn run(store_path: &Path) -> Result<ExitCode> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    lookup(store_path, stdin.lock(), stdout.lock())
}

/// Read a query from `input`, look it up in the store at `store_path` and
/// write the merged attributes to `output`.
///
/// Nothing is written when no credential matches.
pub fn lookup<R: BufRead, W: Write>(store_path: &Path, input: R, output: W) -> Result<ExitCode> {
    let mut query = Attributes::read_from(input).map_err(Error::Input)?;
    tracing::debug!(
        protocol = query.get_or_empty(PROTOCOL),
        host = query.get_or_empty(HOST),
        "credential lookup"
    );

    let credentials = store::load(store_path)?;
    let Some(credential) = matcher::find_match(&query, &credentials) else {
        return Ok(ExitCode::NoMatch);
    };

    matcher::merge(&mut query, credential);
    query.write_to(output).map_err(Error::Output)?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_get_tests.rs"]
mod tests;
