// SPDX-License-Identifier: MIT

use super::*;

fn key(agent: &str) -> WatcherKey {
    WatcherKey { service: "svc1".into(), endpoint: "ep1".into(), agent: agent.into() }
}

#[test]
fn p5_second_register_for_same_key_fails() {
    let reg = WatcherRegistry::new();
    assert!(reg.try_register(key("a1")));
    assert!(!reg.try_register(key("a1")));
    assert_eq!(reg.live_count(), 1);
}

#[test]
fn distinct_keys_both_register() {
    let reg = WatcherRegistry::new();
    assert!(reg.try_register(key("a1")));
    assert!(reg.try_register(key("a2")));
    assert_eq!(reg.live_count(), 2);
}

#[test]
fn unregister_frees_the_key_for_reuse() {
    let reg = WatcherRegistry::new();
    reg.try_register(key("a1"));
    reg.unregister(&key("a1"));
    assert!(!reg.is_live(&key("a1")));
    assert!(reg.try_register(key("a1")));
}
