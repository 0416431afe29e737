// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain nested configuration data.
//!
//! [`Value`] and [`Mapping`] are the interchange types of the crate: an external
//! loader hands a `Mapping` to [`Config::from_mapping`](crate::domain::Config::from_mapping),
//! and [`Config::to_mapping`](crate::domain::Config::to_mapping) hands one back.

use crate::domain::config_key::ConfigKey;
use crate::domain::object::Object;
use indexmap::IndexMap;

/// A plain configuration value.
///
/// Unlike [`ConfigValue`](crate::domain::ConfigValue), nested data is represented as a
/// [`Mapping`] rather than a container.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
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
    /// An ordered list of values.
    List(Vec<Value>),
    /// A nested string-keyed mapping.
    Map(Mapping),
    /// An opaque application object.
    Object(Object),
}

impl Value {
    /// A short name for the kind of value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "mapping",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the mapping if this is a [`Value::Map`].
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Copies this value with every exportable object replaced by its export,
    /// descending into lists and mappings.
    pub(crate) fn exported(&self) -> Value {
        match self {
            Value::List(items) => Value::List(items.iter().map(Value::exported).collect()),
            Value::Map(mapping) => Value::Map(
                mapping
                    .iter()
                    .map(|(k, v)| (k, v.exported()))
                    .collect(),
            ),
            Value::Object(o) => o
                .export()
                .map_or_else(|| Value::Object(o.clone()), Value::Map),
            other => other.clone(),
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident as $conv:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(<$conv>::from(v))
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool as bool,
    i8 => Integer as i64,
    i16 => Integer as i64,
    i32 => Integer as i64,
    i64 => Integer as i64,
    u8 => Integer as i64,
    u16 => Integer as i64,
    u32 => Integer as i64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => String as String,
    &str => String as String,
    Mapping => Map as Mapping,
    Object => Object as Object,
);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// An insertion-ordered mapping from string keys to plain values.
///
/// Keys are coerced through [`ConfigKey`], so integer keys are stored in their
/// decimal string form. Equality ignores entry order.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Mapping, Value};
///
/// let mut mapping = Mapping::from([("a", Value::from(1)), ("b", Value::from("two"))]);
/// mapping.insert(3, true);
///
/// assert_eq!(mapping.get("3"), Some(&Value::Bool(true)));
/// assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["a", "b", "3"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping(IndexMap<String, Value>);

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    /// Creates an empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value, returning the previous value at that key.
    pub fn insert(&mut self, key: impl Into<ConfigKey>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into().into_string(), value.into())
    }

    /// Returns the value at `key`.
    pub fn get(&self, key: impl Into<ConfigKey>) -> Option<&Value> {
        self.0.get(key.into().as_str())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: impl Into<ConfigKey>) -> bool {
        self.0.contains_key(key.into().as_str())
    }

    /// Removes and returns the value at `key`, keeping the order of the others.
    pub fn remove(&mut self, key: impl Into<ConfigKey>) -> Option<Value> {
        self.0.shift_remove(key.into().as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<ConfigKey>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K: Into<ConfigKey>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Mapping {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
