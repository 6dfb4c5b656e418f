// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Credential selection.
//!
//! A record matches a query when:
//!
//! 1. its scheme equals `protocol` (required, non-empty in the query)
//! 2. its host equals `host` (required, non-empty in the query)
//! 3. usernames agree, unless either side is empty
//! 4. the query path starts with the record path, unless either is empty
//!
//! The first matching record in store order wins. There is no ranking by
//! specificity: an earlier, broader entry shadows a later, narrower one.

use crate::protocol::{Attributes, HOST, PASSWORD, PATH, PROTOCOL, USERNAME};
use crate::store::Credential;

/// Return the first credential in `credentials` that satisfies `query`.
pub fn find_match<'a>(query: &Attributes, credentials: &'a [Credential]) -> Option<&'a Credential> {
    let found = credentials.iter().position(|cred| matches(query, cred));
    match found {
        Some(idx) => tracing::debug!(index = idx, "credential matched"),
        None => tracing::debug!(candidates = credentials.len(), "no credential matched"),
    }
    found.map(|idx| &credentials[idx])
}

/// Whether `cred` satisfies every predicate against `query`.
pub fn matches(query: &Attributes, cred: &Credential) -> bool {
    required_eq(query.get(PROTOCOL), &cred.scheme)
        && required_eq(query.get(HOST), &cred.host)
        && username_compatible(query.get_or_empty(USERNAME), cred.username())
        && path_compatible(query.get_or_empty(PATH), cred.path())
}

/// Merge the winning credential back into the query.
///
/// Scheme and host always overwrite. Path, username and password only
/// overwrite when the credential carries a non-empty value, so a
/// caller-supplied value is never blanked out.
pub fn merge(query: &mut Attributes, cred: &Credential) {
    query.set(PROTOCOL, cred.scheme.as_str());
    query.set(HOST, cred.host.as_str());
    let optional = [
        (PATH, cred.path.as_deref()),
        (USERNAME, cred.username.as_deref()),
        (PASSWORD, cred.password.as_deref()),
    ];
    for (key, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            query.set(key, value);
        }
    }
}

fn required_eq(wanted: Option<&str>, have: &str) -> bool {
    matches!(wanted, Some(w) if !w.is_empty() && w == have)
}

fn username_compatible(wanted: &str, have: &str) -> bool {
    wanted.is_empty() || have.is_empty() || wanted == have
}

// Literal prefix: "proj/sub" matches "proj", "pro" does not.
fn path_compatible(wanted: &str, have: &str) -> bool {
    wanted.is_empty() || have.is_empty() || wanted.starts_with(have)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
