// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for store failures.
//!
//! A missing, oversized, or malformed store is fatal: one message on
//! stderr, nothing on stdout, exit code 3.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn missing_store_is_fatal() {
    Home::empty()
        .get("protocol=https\nhost=example.com\n")
        .exits(3)
        .stdout_eq("")
        .stderr_has("git-credential-lookup: io error");
}

#[test]
fn malformed_line_is_fatal() {
    Home::with_store("https://alice:pw@example.com\nexample.org\n")
        .get("protocol=https\nhost=example.com\n")
        .exits(3)
        .stdout_eq("")
        .stderr_has("line 2");
}

#[test]
fn line_without_host_is_fatal() {
    Home::with_store("mailto:alice@example.com\n")
        .get("protocol=https\nhost=example.com\n")
        .exits(3)
        .stderr_has("missing host");
}

#[test]
fn backslash_in_host_is_fatal() {
    Home::with_store("https://example.com\\proj\n")
        .get("protocol=https\nhost=example.com\n")
        .exits(3)
        .stdout_eq("")
        .stderr_has("invalid character in authority");
}

#[test]
fn oversized_store_is_fatal() {
    let line = "https://alice:pw@example.com\n";
    let content = line.repeat(1024 * 1024 / line.len() + 1);
    Home::with_store(&content)
        .get("protocol=https\nhost=example.com\n")
        .exits(3)
        .stdout_eq("")
        .stderr_has("file too large");
}

#[test]
fn error_is_reported_once() {
    let run = Home::empty()
        .get("protocol=https\nhost=example.com\n")
        .exits(3);
    assert_eq!(run.stderr().lines().count(), 1, "stderr: {}", run.stderr());
}
