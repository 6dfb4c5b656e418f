// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

use crate::store::STORE_FILE_NAME;

/// Creates a temp directory holding a `.git-credentials` with `content`.
pub fn temp_store(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STORE_FILE_NAME), content).unwrap();
    dir
}
