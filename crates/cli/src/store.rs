// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Credential store loading.
//!
//! The store holds one URI per line:
//!
//! ```text
//! scheme://[username[:password]@]host[:port][/path]
//! ```
//!
//! Lines are parsed in file order and that order is preserved; the
//! matcher relies on it for first-match-wins selection. Blank lines are
//! skipped. Any other line that fails to parse aborts the whole load.

use std::borrow::Cow;
use std::path::Path;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};
use crate::reader::StoreReader;

/// Default store file name, relative to the home directory.
pub const STORE_FILE_NAME: &str = ".git-credentials";

/// One parsed line of the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Lowercase scheme, e.g. `https`.
    pub scheme: String,
    /// Host including any port, as written in the store.
    pub host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Path without its leading `/`. Never empty when present.
    pub path: Option<String>,
}

impl Credential {
    /// Stored username, or `""` when unspecified.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Stored path, or `""` when unspecified.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

/// Load and parse the store at `path`.
pub fn load(path: &Path) -> Result<Vec<Credential>> {
    let content = StoreReader::new().read(path)?;
    let credentials = parse_store(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = credentials.len(),
        "loaded credential store"
    );
    Ok(credentials)
}

/// Parse store content, one credential per non-blank line.
pub fn parse_store(content: &str) -> Result<Vec<Credential>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parse a single store line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Credential> {
    let line = line.trim();
    let parse_err = |message: String| Error::Parse {
        line: line_no,
        message,
    };

    if line.chars().any(char::is_control) {
        return Err(parse_err("invalid control character".to_string()));
    }

    let url = Url::parse(line).map_err(|e| parse_err(e.to_string()))?;
    let raw = match RawParts::split(line) {
        Some(raw) if url.has_host() => raw,
        _ => return Err(parse_err("missing host".to_string())),
    };
    // Url splits the authority at `\` for special schemes; the raw split does not.
    if raw.authority.contains('\\') {
        return Err(parse_err("invalid character in authority".to_string()));
    }

    let username = decode(url.username()).map_err(&parse_err)?;
    let password = decode(url.password().unwrap_or_default()).map_err(&parse_err)?;
    let path = decode(raw.path).map_err(&parse_err)?;

    Ok(Credential {
        scheme: url.scheme().to_string(),
        host: raw.host.to_string(),
        username: non_empty(username),
        password: non_empty(password),
        path: non_empty(Cow::Borrowed(normalize_path(&path))),
    })
}

/// Strip leading path separators so stored paths compare as plain prefixes.
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Host and path exactly as written in the line.
///
/// `Url` drops default ports and resolves `.`/`..` segments, so only the
/// scheme and userinfo are taken from it.
struct RawParts<'a> {
    /// Userinfo and host, between `://` and the start of the path.
    authority: &'a str,
    /// Authority after any userinfo `@`, port included.
    host: &'a str,
    /// From the end of the authority up to any query or fragment.
    path: &'a str,
}

impl<'a> RawParts<'a> {
    fn split(line: &'a str) -> Option<Self> {
        let (_, rest) = line.split_once("://")?;
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(end);
        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        let path = tail.split(['?', '#']).next().unwrap_or_default();
        (!host.is_empty()).then_some(Self {
            authority,
            host,
            path,
        })
    }
}

fn decode(component: &str) -> std::result::Result<Cow<'_, str>, String> {
    percent_decode_str(component)
        .decode_utf8()
        .map_err(|e| format!("invalid percent-encoding: {e}"))
}

fn non_empty(value: Cow<'_, str>) -> Option<String> {
    (!value.is_empty()).then(|| value.into_owned())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
