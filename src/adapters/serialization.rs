// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serde integration.
//!
//! This module lets an external loader go straight from any self-describing serde
//! format to a [`Config`], and lets a configuration be written back out. Maps keep
//! their insertion order in both directions.
//!
//! Mapping keys are coerced to strings while deserializing, so an integer YAML key
//! such as `1:` becomes the entry `"1"`.
//!
//! # Examples
//!
//! ```rust
//! use nestcfg::domain::Config;
//!
//! let config: Config = serde_json::from_str(r#"{"db": {"port": 5432}}"#).unwrap();
//! assert_eq!(config.get_config("db").unwrap().get_i64("port").unwrap(), 5432);
//!
//! let json = serde_json::to_string(&config).unwrap();
//! assert_eq!(json, r#"{"db":{"port":5432}}"#);
//! ```

use crate::domain::{Config, ConfigValue, Mapping, Object, Value};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

fn serialize_object<S: Serializer>(object: &Object, serializer: S) -> Result<S::Ok, S::Error> {
    match object.export() {
        Some(mapping) => mapping.serialize(serializer),
        None => Err(ser::Error::custom(format!(
            "opaque object of type {} cannot be serialized",
            object.type_name()
        ))),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(mapping) => mapping.serialize(serializer),
            Value::Object(object) => serialize_object(object, serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Null => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(n) => serializer.serialize_i64(*n),
            ConfigValue::Float(f) => serializer.serialize_f64(*f),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::List(items) => items.serialize(serializer),
            ConfigValue::Object(object) => serialize_object(object, serializer),
            ConfigValue::Nested(config) => config.serialize(serializer),
        }
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a configuration value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        // Values past i64::MAX are kept as floats rather than rejected.
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Value, Value>()? {
            let key = match key {
                Value::String(s) => s,
                Value::Integer(n) => n.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(de::Error::custom(format!(
                        "unsupported {} mapping key",
                        other.type_name()
                    )))
                }
            };
            mapping.insert(key, value);
        }
        Ok(Value::Map(mapping))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Map(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_name()),
                &"a mapping",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mapping = Mapping::deserialize(deserializer)?;
        tracing::trace!("Deserialized configuration with {} entries", mapping.len());
        Ok(Config::from_mapping(mapping, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_config_keeps_order() {
        let config = Config::from_mapping(Mapping::from([("z", 1), ("a", 2)]), false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_deserialize_null_as_empty() {
        let config: Config = serde_json::from_str("null").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_scalar_root() {
        let result: Result<Config, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    #[test]
    fn test_opaque_object_fails_to_serialize() {
        let mut config = Config::new();
        config.set("handle", Object::new(5u8)).unwrap();
        let err = serde_json::to_string(&config).unwrap_err();
        assert!(err.to_string().contains("cannot be serialized"));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value.type_name(), "float");
    }
}
