// SPDX-License-Identifier: MIT

//! The whitespace-tokenized endpoint set stored as `/root/services/<svc>`.
//!
//! The original source mutated this as a raw byte string using substring
//! containment (`bytes.Contains`), which corrupts membership when one
//! endpoint name is a substring of another (e.g. `10.0.0.1` / `10.0.0.11`).
//! This type always operates on whole whitespace-delimited tokens instead
//! (§9, corrected behavior).

use std::collections::BTreeSet;
use std::fmt;

/// A whitespace-normalized, deduplicated set of endpoint tokens.
///
/// `Display` renders the canonical single-space-separated form (P3): no
/// duplicates, no leading/trailing whitespace, single-space separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMembership(BTreeSet<String>);

impl ServiceMembership {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse the raw znode bytes into a token set, tolerating arbitrary
    /// whitespace runs and surrounding padding.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Insert `token`. Returns `true` if it was newly added.
    pub fn insert(&mut self, token: &str) -> bool {
        self.0.insert(token.to_string())
    }

    /// Remove `token`. Returns `true` if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.remove(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ServiceMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "membership_tests.rs"]
mod tests;
