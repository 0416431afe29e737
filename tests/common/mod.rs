// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use nestcfg::domain::{Mapping, Value};
use nestcfg::ports::Exportable;

/// The `{"a": 1, "b": {"c": 2}}` mapping used throughout the tests.
#[allow(dead_code)]
pub fn nested_mapping() -> Mapping {
    Mapping::from([
        ("a", Value::from(1)),
        ("b", Value::from(Mapping::from([("c", 2)]))),
    ])
}

/// A three-level mapping resembling a real service configuration.
#[allow(dead_code)]
pub fn service_mapping() -> Mapping {
    Mapping::from([
        ("name", Value::from("billing")),
        ("debug", Value::from(false)),
        (
            "database",
            Value::from(Mapping::from([
                ("host", Value::from("localhost")),
                ("port", Value::from(5432)),
                (
                    "pool",
                    Value::from(Mapping::from([("min", 1), ("max", 16)])),
                ),
            ])),
        ),
        ("tags", Value::from(vec!["eu", "primary"])),
    ])
}

/// An application type that takes part in export.
#[derive(Debug)]
#[allow(dead_code)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Exportable for Endpoint {
    fn export(&self) -> Mapping {
        Mapping::from([
            ("host", Value::from(self.host.as_str())),
            ("port", Value::from(self.port)),
        ])
    }
}
