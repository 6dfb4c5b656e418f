// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read-only git credential helper backed by ~/.git-credentials
#[derive(Parser)]
#[command(name = "git-credential-lookup")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use a specific credential store instead of ~/.git-credentials
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "CREDLOOKUP_FILE",
        value_name = "PATH"
    )]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Look up a credential for the attributes read from stdin
    Get,
    /// Accepted for protocol compatibility; does nothing
    Store,
    /// Accepted for protocol compatibility; does nothing
    Erase,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
