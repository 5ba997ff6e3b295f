// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn parse_normalizes_whitespace() {
    let m = ServiceMembership::parse("  ep1   ep2  ep1 ");
    assert_eq!(m.to_string(), "ep1 ep2");
}

#[test]
fn parse_empty_string_is_empty_set() {
    assert!(ServiceMembership::parse("").is_empty());
    assert!(ServiceMembership::parse("   ").is_empty());
}

#[test]
fn insert_and_remove_are_token_level_not_substring() {
    let mut m = ServiceMembership::parse("10.0.0.1 10.0.0.11");
    assert!(m.contains("10.0.0.1"));
    assert!(m.contains("10.0.0.11"));

    // removing the short name must not also drop the longer one that
    // contains it as a substring
    m.remove("10.0.0.1");
    assert!(!m.contains("10.0.0.1"));
    assert!(m.contains("10.0.0.11"));
}

#[test]
fn insert_is_idempotent() {
    let mut m = ServiceMembership::new();
    assert!(m.insert("ep1"));
    assert!(!m.insert("ep1"));
    assert_eq!(m.to_string(), "ep1");
}

#[test]
fn display_has_no_leading_trailing_or_double_space() {
    let m = ServiceMembership::parse("ep2 ep1 ep3");
    let s = m.to_string();
    assert_eq!(s.trim(), s);
    assert!(!s.contains("  "));
}
