// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! git-credential-lookup entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use credlookup::cli::{Cli, Command};
use credlookup::error::ExitCode;
use credlookup::{cmd_get, discovery};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CREDLOOKUP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    // stdout carries the credential protocol; logs go to stderr only.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("git-credential-lookup: {}", e);
            match e.downcast_ref::<credlookup::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Get => {
            let store = discovery::resolve_store(cli.file.as_deref())?;
            Ok(cmd_get::run(&store)?)
        }
        Command::Store | Command::Erase => {
            tracing::debug!(command = ?cli.command, "ignoring write request");
            Ok(ExitCode::Success)
        }
    }
}
