// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for building containers from, and writing them back to, serde formats.

#![cfg(feature = "serde")]

mod common;

use common::{service_mapping, Endpoint};
use nestcfg::domain::{Config, ConfigValue, Mapping, Object, Value};

#[test]
fn test_config_from_json_document() {
    let json = r#"{
        "name": "billing",
        "debug": false,
        "database": {"host": "localhost", "port": 5432, "pool": {"min": 1, "max": 16}},
        "tags": ["eu", "primary"]
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.to_mapping(), service_mapping());
    assert!(!config.is_read_only());
}

#[test]
fn test_config_from_json_value() {
    let parsed = serde_json::json!({"a": 1, "b": {"c": 2}, "n": null, "f": 1.5});
    let config: Config = serde_json::from_value(parsed).unwrap();

    assert_eq!(config.get_i64("a").unwrap(), 1);
    assert_eq!(config.get_path("b.c"), Some(&ConfigValue::Integer(2)));
    assert!(config.exists("n"));
    assert!(config["n"].is_null());
    assert_eq!(config.get_f64("f").unwrap(), 1.5);
}

#[test]
fn test_mapping_then_lock() {
    let mapping: Mapping = serde_json::from_str(r#"{"x": 1, "y": 2, "z": 3}"#).unwrap();
    let mut config = Config::from_mapping(mapping, true);

    assert_eq!(config.len(), 3);
    assert!(config.set("x", 0).unwrap_err().is_write_inhibited());
}

#[test]
fn test_serialize_nested_config() {
    let config = Config::from_mapping(service_mapping(), false);
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["database"]["pool"]["max"], 16);
    assert_eq!(json["tags"][1], "primary");
    assert_eq!(json["debug"], false);
}

#[test]
fn test_serialize_exportable_object() {
    let mut config = Config::new();
    config
        .set(
            "endpoint",
            Object::exportable(Endpoint {
                host: "localhost".to_string(),
                port: 8080,
            }),
        )
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"endpoint":{"host":"localhost","port":8080}}"#);
}

#[test]
fn test_value_round_trip_through_json() {
    let value = Value::from(service_mapping());
    let text = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_exported_mapping_serializes_like_config() {
    let config = Config::from_mapping(service_mapping(), false);
    let from_config = serde_json::to_string(&config).unwrap();
    let from_export = serde_json::to_string(&config.to_mapping()).unwrap();
    assert_eq!(from_config, from_export);
}

#[test]
fn test_export_and_serialize_agree_on_listed_objects() {
    let mut config = Config::new();
    config
        .set(
            "upstreams",
            vec![Value::from(Object::exportable(Endpoint {
                host: "localhost".to_string(),
                port: 8080,
            }))],
        )
        .unwrap();

    let from_config = serde_json::to_string(&config).unwrap();
    let from_export = serde_json::to_string(&config.to_mapping()).unwrap();
    assert_eq!(from_config, r#"{"upstreams":[{"host":"localhost","port":8080}]}"#);
    assert_eq!(from_export, from_config);
}
