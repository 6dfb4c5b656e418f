// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only git credential helper.
//!
//! Looks up credentials in a `~/.git-credentials` style store: one URI per
//! line, first match wins.

pub mod cli;
pub mod cmd_get;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod protocol;
pub mod reader;
pub mod store;

pub use cli::{Cli, Command};
pub use error::{Error, ExitCode, Result};
pub use matcher::{find_match, merge};
pub use protocol::Attributes;
pub use reader::StoreReader;
pub use store::{Credential, load};

#[cfg(test)]
pub mod test_utils;
