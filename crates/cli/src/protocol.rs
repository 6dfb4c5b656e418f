// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Credential helper line protocol.
//!
//! Git talks to helpers with `key=value` lines terminated by an empty line
//! or end of stream. Unknown keys are kept and echoed back unchanged.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

/// Transport scheme, e.g. `https`.
pub const PROTOCOL: &str = "protocol";
/// Host including any port.
pub const HOST: &str = "host";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
/// Repository path, only sent when `credential.useHttpPath` is set.
pub const PATH: &str = "path";

/// Attribute mapping exchanged with the caller.
///
/// A missing key means "unspecified", which is distinct from a key that
/// is present with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, treating a missing key as `""`.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read attributes until an empty line or end of stream.
    ///
    /// Keys and values are trimmed. Lines without `=` are ignored, including
    /// whitespace-only lines. Only the first `=` separates key from value.
    pub fn read_from<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut attrs = Self::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                break;
            }
            match line.split_once('=') {
                Some((key, value)) => attrs.set(key.trim(), value.trim()),
                None => tracing::debug!("ignoring input line without '='"),
            }
        }
        Ok(attrs)
    }

    /// Write one `key=value` line per attribute.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (key, value) in self.iter() {
            writeln!(writer, "{key}={value}")?;
        }
        writer.flush()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
