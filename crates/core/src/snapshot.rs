// SPDX-License-Identifier: MIT

//! Symmetric difference over agent-membership snapshots (§4.E).
//!
//! The membership tracker only ever acts on the result of `difference`
//! when the new snapshot has grown (`len(new) > len(old)`), so in practice
//! only the `new \ old` half of the symmetric difference drives watcher
//! spawns. `difference` itself is kept faithful to the full symmetric
//! difference (P6) rather than narrowed to one side, since that's what the
//! source computes and other callers may reasonably expect the full set.

use std::collections::HashSet;
use std::hash::Hash;

/// The symmetric difference of `a` and `b`: elements in exactly one of the
/// two inputs. `difference(a, b) == difference(b, a)` and
/// `difference(a, a)` is empty (P6).
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();
    set_a
        .symmetric_difference(&set_b)
        .map(|&item| item.clone())
        .collect()
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
