// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for read-only locking.
//!
//! These tests verify that a locked container rejects every mutation, leaves its
//! entries untouched when it does, and passes the lock down to nested containers.

mod common;

use common::{nested_mapping, service_mapping};
use nestcfg::domain::{Config, ConfigError, ConfigValue, Mapping};
use nestcfg::ports::ConfigStore;

#[test]
fn test_set_fails_after_read_only() {
    let mut config = Config::from_mapping(nested_mapping(), false);
    let before = config.to_mapping();

    config.read_only();
    let err = config.set("a", 10).unwrap_err();

    assert!(matches!(err, ConfigError::WriteInhibited { ref key } if key == "a"));
    assert_eq!(config.to_mapping(), before);
}

#[test]
fn test_new_keys_fail_after_read_only() {
    let mut config = Config::new();
    config.read_only();
    assert!(config.set("fresh", true).is_err());
    assert!(!config.exists("fresh"));
}

#[test]
fn test_read_only_construction_seeds_then_locks() {
    let mut config = Config::from_mapping(nested_mapping(), true);

    assert_eq!(config.get_i64("a").unwrap(), 1);
    assert_eq!(config.get_path("b.c"), Some(&ConfigValue::Integer(2)));
    assert!(config.set("a", 1).unwrap_err().is_write_inhibited());
    assert!(config.set("other", 1).unwrap_err().is_write_inhibited());
}

#[test]
fn test_lock_state_is_reported() {
    let mut config = Config::new();
    assert!(!config.is_read_only());
    config.read_only();
    assert!(config.is_read_only());
    config.read_only();
    assert!(config.is_read_only());
}

#[test]
fn test_lock_cascades_through_every_level() {
    let mut config = Config::from_mapping(service_mapping(), false);
    config.read_only();

    let database = config.get_config("database").unwrap();
    assert!(database.is_read_only());
    assert!(database.get_config("pool").unwrap().is_read_only());

    let pool = config
        .get_config_mut("database")
        .and_then(|db| db.get_config_mut("pool"))
        .unwrap();
    assert!(pool.set("max", 64).unwrap_err().is_write_inhibited());
    assert_eq!(
        config.get_path("database.pool.max"),
        Some(&ConfigValue::Integer(16))
    );
}

#[test]
fn test_locking_nested_does_not_lock_parent() {
    let mut config = Config::from_mapping(nested_mapping(), false);
    config.get_config_mut("b").unwrap().read_only();

    assert!(!config.is_read_only());
    config.set("a", 2).unwrap();
    assert!(config.set_path("b.c", 3).unwrap_err().is_write_inhibited());

    // Replacing the locked child wholesale is a write on the parent.
    config.set("b", Mapping::from([("c", 3)])).unwrap();
    assert!(!config.get_config("b").unwrap().is_read_only());
}

#[test]
fn test_remove_respects_lock() {
    let mut config = Config::from_mapping(nested_mapping(), true);
    assert!(config.remove("a").unwrap_err().is_write_inhibited());
    assert!(config.remove("nope").unwrap_err().is_write_inhibited());
    assert_eq!(config.len(), 2);
}

#[test]
fn test_set_if_absent_existing_key_ignores_lock() {
    let mut config = Config::from_mapping(nested_mapping(), true);
    assert!(!config.set_if_absent("a", 5).unwrap());
    assert!(config.set_if_absent("new", 5).unwrap_err().is_write_inhibited());
}

#[test]
fn test_reads_still_work_when_locked() {
    let config = Config::from_mapping(service_mapping(), true);
    assert_eq!(config.get_str("name").unwrap(), "billing");
    assert!(config.exists("debug"));
    assert_eq!(config.len(), 4);
    assert_eq!(config.to_mapping(), service_mapping());
}

#[test]
fn test_lock_through_trait_object() {
    let mut store: Box<dyn ConfigStore> = Box::new(Config::from_mapping(nested_mapping(), false));
    store.read_only();
    assert!(store.is_read_only());
    assert!(store
        .set("a".into(), ConfigValue::from(3))
        .unwrap_err()
        .is_write_inhibited());
}

#[test]
fn test_cloned_container_keeps_lock() {
    let config = Config::from_mapping(nested_mapping(), true);
    let mut copy = config.clone();
    assert!(copy.is_read_only());
    assert!(copy.set("a", 0).is_err());
}
