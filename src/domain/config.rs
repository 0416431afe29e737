// SPDX-License-Identifier: MIT OR Apache-2.0

//! The nested configuration container.
//!
//! [`Config`] maps string keys to [`ConfigValue`]s. Nested mappings written into it
//! become nested `Config`s, so a whole configuration tree can be read and written
//! through one interface and exported back into plain data.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::{Mapping, Value};
use crate::ports::Exportable;
use indexmap::IndexMap;
use std::ops::Index;

static NULL: ConfigValue = ConfigValue::Null;

/// A nested key-value configuration container with optional read-only locking.
///
/// Keys are coerced to strings, so `config.get(1)` and `config.get("1")` read the same
/// entry. Entries keep their insertion order for iteration and export.
///
/// Once [`read_only`](Config::read_only) has been called every mutating operation fails
/// with [`ConfigError::WriteInhibited`]. Locking applies to the container and every
/// nested container it holds at that moment, and cannot be undone.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Config, ConfigValue, Mapping, Value};
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let initial = Mapping::from([
///     ("name", Value::from("demo")),
///     ("database", Value::from(Mapping::from([("port", 5432)]))),
/// ]);
///
/// let mut config = Config::from_mapping(initial, false);
/// config.set("debug", true)?;
/// assert_eq!(config.get_path("database.port"), Some(&ConfigValue::Integer(5432)));
///
/// config.read_only();
/// assert!(config.set("debug", false).unwrap_err().is_write_inhibited());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    entries: IndexMap<String, ConfigValue>,
    read_only: bool,
}

impl Config {
    /// Creates an empty, writable container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container seeded from a plain mapping.
    ///
    /// Every entry goes through the same conversion as [`set`](Config::set). The lock,
    /// if requested, is applied after seeding, so construction never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping};
    ///
    /// let config = Config::from_mapping(Mapping::from([("x", 1), ("y", 2)]), true);
    /// assert_eq!(config.len(), 2);
    /// assert!(config.is_read_only());
    /// ```
    pub fn from_mapping(mapping: Mapping, read_only: bool) -> Self {
        Self::from_entries(mapping, read_only)
    }

    /// Creates a container seeded from any iterator of key/value pairs.
    pub fn from_entries<I, K, V>(entries: I, read_only: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ConfigKey>,
        V: Into<ConfigValue>,
    {
        let mut config = Config::new();
        for (key, value) in entries {
            config.store(key.into(), value.into());
        }
        if read_only {
            config.read_only();
        }
        config
    }

    fn store(&mut self, key: ConfigKey, value: ConfigValue) {
        tracing::trace!("Setting configuration key '{}' ({})", key, value.type_name());
        self.entries.insert(key.into_string(), value);
    }

    fn ensure_writable(&self, key: &ConfigKey) -> Result<()> {
        if self.read_only {
            tracing::debug!("Rejected write to read-only configuration key '{}'", key);
            return Err(ConfigError::write_inhibited(key.as_str()));
        }
        Ok(())
    }

    /// Returns the value stored at `key`, if any.
    ///
    /// A nested container is returned as [`ConfigValue::Nested`].
    pub fn get(&self, key: impl Into<ConfigKey>) -> Option<&ConfigValue> {
        self.entries.get(key.into().as_str())
    }

    /// Returns a copy of the value at `key`, or `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, ConfigValue};
    ///
    /// let config = Config::new();
    /// assert_eq!(config.get_or("timeout", 30), ConfigValue::Integer(30));
    /// ```
    pub fn get_or(&self, key: impl Into<ConfigKey>, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Stores `value` at `key`, overwriting any existing entry.
    ///
    /// A [`Value::Map`] or [`Mapping`] is converted into a new writable nested
    /// container. An overwritten key keeps its position in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteInhibited`] if the container is read-only. The
    /// container is left unchanged.
    pub fn set(&mut self, key: impl Into<ConfigKey>, value: impl Into<ConfigValue>) -> Result<()> {
        let key = key.into();
        self.ensure_writable(&key)?;
        self.store(key, value.into());
        Ok(())
    }

    /// Stores `value` at `key` only if the key is absent.
    ///
    /// Returns `Ok(true)` if the value was written and `Ok(false)` if the key already
    /// existed. An existing key is never an error, even on a read-only container.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteInhibited`] if the key is absent and the container
    /// is read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, ConfigValue};
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let mut config = Config::new();
    /// assert!(config.set_if_absent("level", "info")?);
    /// assert!(!config.set_if_absent("level", "trace")?);
    /// assert_eq!(config.get_str("level")?, "info");
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_if_absent(
        &mut self,
        key: impl Into<ConfigKey>,
        value: impl Into<ConfigValue>,
    ) -> Result<bool> {
        let key = key.into();
        if self.exists(&key) {
            return Ok(false);
        }
        self.set(key, value)?;
        Ok(true)
    }

    /// Returns `true` if an entry is present at `key`, even if its value is null.
    pub fn exists(&self, key: impl Into<ConfigKey>) -> bool {
        self.entries.contains_key(key.into().as_str())
    }

    /// Removes the entry at `key`, returning its value. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteInhibited`] if the container is read-only, whether
    /// or not the key is present.
    pub fn remove(&mut self, key: impl Into<ConfigKey>) -> Result<Option<ConfigValue>> {
        let key = key.into();
        self.ensure_writable(&key)?;
        let removed = self.entries.shift_remove(key.as_str());
        if removed.is_some() {
            tracing::trace!("Removed configuration key '{}'", key);
        }
        Ok(removed)
    }

    /// Locks this container and every nested container it currently holds.
    ///
    /// Calling it again has no further effect. There is no way to unlock.
    pub fn read_only(&mut self) {
        if !self.read_only {
            tracing::debug!("Locking configuration with {} entries", self.entries.len());
        }
        self.read_only = true;
        for value in self.entries.values_mut() {
            if let ConfigValue::Nested(nested) = value {
                nested.read_only();
            }
        }
    }

    /// Returns `true` if the container is locked.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Number of top-level entries. Entries inside nested containers are not counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exports the container as a plain nested mapping.
    ///
    /// Nested containers and exportable objects are converted recursively; other
    /// values are passed through unchanged. The container is not modified.
    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::with_capacity(self.entries.len());
        for (key, value) in self.entries.iter() {
            mapping.insert(key, value.to_value());
        }
        mapping
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.entries.values()
    }

    /// Looks up a dotted path such as `"database.primary.host"`.
    ///
    /// Each segment but the last must name a nested container.
    pub fn get_path(&self, path: impl Into<ConfigKey>) -> Option<&ConfigValue> {
        let path = path.into();
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            current = current.as_config()?.entries.get(segment)?;
        }
        Some(current)
    }

    /// Stores a value at a dotted path such as `"database.primary.host"`.
    ///
    /// This is the attribute-style counterpart of [`set`](Config::set), which stores a
    /// dotted key flat as a single entry. `set_path` instead walks one nested container
    /// per segment:
    ///
    /// - a missing intermediate segment is created as an empty writable container;
    /// - each container on the way is checked for the lock before it is modified, so a
    ///   locked parent rejects the write even when the leaf container is writable;
    /// - an intermediate segment holding a scalar, list or object is never replaced.
    ///
    /// Containers created before a failure stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteInhibited`] if a container that would be modified is
    /// read-only, or [`ConfigError::NotAContainer`] if an intermediate segment holds a
    /// value that is not a nested container.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::Config;
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let mut config = Config::new();
    /// config.set_path("server.tls.enabled", true)?;
    /// assert_eq!(config.get_config("server")?.len(), 1);
    /// assert!(config.get_path("server.tls.enabled").and_then(|v| v.as_bool()).unwrap());
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_path(
        &mut self,
        path: impl Into<ConfigKey>,
        value: impl Into<ConfigValue>,
    ) -> Result<()> {
        let path = path.into();
        let segments: Vec<&str> = path.segments().collect();
        self.set_segments(&segments, value.into())
    }

    fn set_segments(&mut self, segments: &[&str], value: ConfigValue) -> Result<()> {
        match segments.split_first() {
            Some((last, [])) => self.set(*last, value),
            Some((head, rest)) => {
                if !self.exists(*head) {
                    self.set(*head, Config::new())?;
                }
                match self.entries.get_mut(*head) {
                    Some(ConfigValue::Nested(nested)) => nested.set_segments(rest, value),
                    _ => Err(ConfigError::NotAContainer {
                        key: head.to_string(),
                    }),
                }
            }
            None => self.set("", value),
        }
    }

    /// Returns the value at `key` or a [`ConfigError::ConfigKeyNotFound`] error.
    pub fn require(&self, key: impl Into<ConfigKey>) -> Result<&ConfigValue> {
        let key = key.into();
        self.entries
            .get(key.as_str())
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.into_string(),
            })
    }

    fn require_as<'a, T>(
        &'a self,
        key: impl Into<ConfigKey>,
        expected: &'static str,
        convert: impl FnOnce(&'a ConfigValue) -> Option<T>,
    ) -> Result<T> {
        let key = key.into();
        let value = self.require(&key)?;
        convert(value).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.into_string(),
            expected,
            found: value.type_name(),
        })
    }

    /// Returns the string stored at `key`.
    pub fn get_str(&self, key: impl Into<ConfigKey>) -> Result<&str> {
        self.require_as(key, "string", ConfigValue::as_str)
    }

    /// Returns the boolean stored at `key`.
    pub fn get_bool(&self, key: impl Into<ConfigKey>) -> Result<bool> {
        self.require_as(key, "boolean", ConfigValue::as_bool)
    }

    /// Returns the integer stored at `key`.
    pub fn get_i64(&self, key: impl Into<ConfigKey>) -> Result<i64> {
        self.require_as(key, "integer", ConfigValue::as_i64)
    }

    /// Returns the number stored at `key`, widening integers to `f64`.
    pub fn get_f64(&self, key: impl Into<ConfigKey>) -> Result<f64> {
        self.require_as(key, "float", ConfigValue::as_f64)
    }

    /// Returns the nested container stored at `key`.
    pub fn get_config(&self, key: impl Into<ConfigKey>) -> Result<&Config> {
        self.require_as(key, "configuration", ConfigValue::as_config)
    }

    /// Returns the nested container at `key` for in-place changes.
    ///
    /// Writes through the returned reference are governed by the nested container's own
    /// lock, which [`read_only`](Config::read_only) on this container also sets.
    pub fn get_config_mut(&mut self, key: impl Into<ConfigKey>) -> Option<&mut Config> {
        self.entries
            .get_mut(key.into().as_str())
            .and_then(ConfigValue::as_config_mut)
    }
}

impl Exportable for Config {
    fn export(&self) -> Mapping {
        self.to_mapping()
    }
}

impl<K: Into<ConfigKey>> Index<K> for Config {
    type Output = ConfigValue;

    /// Reads the value at `key`, yielding [`ConfigValue::Null`] when it is absent.
    fn index(&self, key: K) -> &ConfigValue {
        self.get(key).unwrap_or(&NULL)
    }
}

impl From<Mapping> for Config {
    fn from(mapping: Mapping) -> Self {
        Config::from_mapping(mapping, false)
    }
}

impl From<Config> for Value {
    fn from(config: Config) -> Self {
        Value::Map(config.to_mapping())
    }
}

impl<K: Into<ConfigKey>, V: Into<ConfigValue>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Config::from_entries(iter, false)
    }
}

/// Iterator over the entries of a [`Config`], in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, ConfigValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a ConfigValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a str, &'a ConfigValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
