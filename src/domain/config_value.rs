// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stored configuration values.
//!
//! This module provides the `ConfigValue` type, the value held by a configuration
//! container. It mirrors [`Value`] except that nested mappings have already been
//! converted into nested [`Config`] containers.

use crate::domain::config::Config;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::object::Object;
use crate::domain::value::{Mapping, Value};
use crate::ports::Exportable;
use std::str::FromStr;

/// A value stored in a configuration container.
///
/// Converting a [`Value::Map`] or a [`Mapping`] into a `ConfigValue` builds a new,
/// independent, writable [`Config`]; every other variant carries over unchanged.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{ConfigValue, Mapping, Value};
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64(), Some(42));
///
/// let nested = ConfigValue::from(Mapping::from([("host", "localhost")]));
/// let config = nested.as_config().unwrap();
/// assert_eq!(config.get_str("host").unwrap(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of plain values.
    List(Vec<Value>),
    /// An opaque application object.
    Object(Object),
    /// A nested configuration container.
    Nested(Config),
}

impl ConfigValue {
    /// A short name for the kind of value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Object(_) => "object",
            ConfigValue::Nested(_) => "configuration",
        }
    }

    /// Returns `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as an `f64`, widening integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from(2.5).as_f64(), Some(2.5));
    /// assert_eq!(ConfigValue::from(3).as_f64(), Some(3.0));
    /// assert_eq!(ConfigValue::from("3").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the list if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object handle if this is an object value.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            ConfigValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the nested container if this is a nested configuration.
    pub fn as_config(&self) -> Option<&Config> {
        match self {
            ConfigValue::Nested(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the nested container mutably if this is a nested configuration.
    pub fn as_config_mut(&mut self) -> Option<&mut Config> {
        match self {
            ConfigValue::Nested(c) => Some(c),
            _ => None,
        }
    }

    /// Parses a string value into any type that implements `FromStr`.
    ///
    /// `key` is only used to build the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let s = self.as_str().ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "string",
            found: self.type_name(),
        })?;

        s.parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }

    /// Converts this value into plain data.
    ///
    /// Nested containers and exportable objects are exported, including objects held
    /// inside lists; every other value, opaque objects included, is passed through
    /// unchanged.
    pub fn to_value(&self) -> Value {
        match self {
            ConfigValue::Null => Value::Null,
            ConfigValue::Bool(b) => Value::Bool(*b),
            ConfigValue::Integer(n) => Value::Integer(*n),
            ConfigValue::Float(f) => Value::Float(*f),
            ConfigValue::String(s) => Value::String(s.clone()),
            ConfigValue::List(items) => Value::List(items.iter().map(Value::exported).collect()),
            ConfigValue::Object(o) => o
                .export()
                .map_or_else(|| Value::Object(o.clone()), Value::Map),
            ConfigValue::Nested(c) => Value::Map(c.export()),
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Integer(n) => ConfigValue::Integer(n),
            Value::Float(f) => ConfigValue::Float(f),
            Value::String(s) => ConfigValue::String(s),
            Value::List(items) => ConfigValue::List(items),
            Value::Map(m) => ConfigValue::Nested(Config::from_mapping(m, false)),
            Value::Object(o) => ConfigValue::Object(o),
        }
    }
}

impl From<Mapping> for ConfigValue {
    fn from(mapping: Mapping) -> Self {
        ConfigValue::Nested(Config::from_mapping(mapping, false))
    }
}

impl From<Config> for ConfigValue {
    fn from(config: Config) -> Self {
        ConfigValue::Nested(config)
    }
}

impl From<&ConfigValue> for Value {
    fn from(value: &ConfigValue) -> Self {
        value.to_value()
    }
}

macro_rules! impl_config_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(v: $ty) -> Self {
                    ConfigValue::from(Value::from(v))
                }
            }
        )*
    };
}

impl_config_value_from!(
    bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str, Object, ()
);

impl<T: Into<Value>> From<Option<T>> for ConfigValue {
    fn from(v: Option<T>) -> Self {
        ConfigValue::from(Value::from(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for ConfigValue {
    fn from(v: Vec<T>) -> Self {
        ConfigValue::from(Value::from(v))
    }
}
