// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Store file discovery.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::STORE_FILE_NAME;

/// Default store location under `home`.
pub fn default_store(home: &Path) -> PathBuf {
    home.join(STORE_FILE_NAME)
}

/// Resolve the store path from CLI arg, env var, or the home directory.
///
/// Priority:
/// 1. CLI flag `-f`/`--file` (handled by clap with env = "CREDLOOKUP_FILE")
/// 2. `~/.git-credentials`
///
/// The path is not checked for existence here; a missing store surfaces
/// as an I/O error when it is loaded.
pub fn resolve_store(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_store_with(explicit, dirs::home_dir())
}

/// Same as [`resolve_store`] with the home directory supplied by the caller.
pub fn resolve_store_with(explicit: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match home {
        Some(home) => Ok(default_store(&home)),
        None => Err(Error::Config {
            message: "cannot resolve home directory".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
