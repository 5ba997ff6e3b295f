// SPDX-License-Identifier: MIT

//! The quorum rule (§4.F): an endpoint is healthy iff strictly more than
//! half of the agents with live votes for it voted `true`.

/// Returns `true` iff `healthy / total > 0.5`.
///
/// `total == 0` is the "no votes cast yet" case — the aggregator must skip
/// the update entirely rather than calling this with a zero denominator;
/// this function treats it as not-holding so callers that do call it with
/// `total == 0` fail safe instead of dividing by zero.
pub fn quorum_holds(healthy: usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }
    healthy * 2 > total
}

#[cfg(test)]
#[path = "quorum_tests.rs"]
mod tests;
