// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the object-safe interface application
//! code can depend on instead of the concrete [`Config`](crate::domain::Config) type.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::Exportable;

/// The read/write/lock interface of a configuration container.
///
/// Every method mirrors the inherent method of the same name on
/// [`Config`](crate::domain::Config), taking already-coerced [`ConfigKey`]s so the
/// trait stays object-safe.
///
/// # Examples
///
/// ```rust
/// use nestcfg::domain::{Config, ConfigKey, ConfigValue};
/// use nestcfg::ports::ConfigStore;
///
/// fn apply_defaults(store: &mut dyn ConfigStore) -> nestcfg::domain::Result<()> {
///     store.set_if_absent(ConfigKey::from("log.level"), ConfigValue::from("info"))?;
///     Ok(())
/// }
///
/// let mut config = Config::new();
/// apply_defaults(&mut config).unwrap();
/// assert_eq!(config.get_str("log.level").unwrap(), "info");
/// ```
pub trait ConfigStore: Exportable {
    /// Returns the value stored at `key`, if any.
    fn get(&self, key: &ConfigKey) -> Option<&ConfigValue>;

    /// Stores `value` at `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::WriteInhibited`](crate::domain::ConfigError::WriteInhibited)
    /// when the store is read-only.
    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()>;

    /// Stores `value` at `key` if the key is absent, returning whether it wrote.
    fn set_if_absent(&mut self, key: ConfigKey, value: ConfigValue) -> Result<bool>;

    /// Returns `true` if an entry is present at `key`.
    fn exists(&self, key: &ConfigKey) -> bool;

    /// Removes the entry at `key`.
    fn remove(&mut self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Locks the store against further writes.
    fn read_only(&mut self);

    /// Returns `true` if the store is locked.
    fn is_read_only(&self) -> bool;
}

impl ConfigStore for crate::domain::Config {
    fn get(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        crate::domain::Config::get(self, key)
    }

    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        crate::domain::Config::set(self, key, value)
    }

    fn set_if_absent(&mut self, key: ConfigKey, value: ConfigValue) -> Result<bool> {
        crate::domain::Config::set_if_absent(self, key, value)
    }

    fn exists(&self, key: &ConfigKey) -> bool {
        crate::domain::Config::exists(self, key)
    }

    fn remove(&mut self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        crate::domain::Config::remove(self, key)
    }

    fn read_only(&mut self) {
        crate::domain::Config::read_only(self)
    }

    fn is_read_only(&self) -> bool {
        crate::domain::Config::is_read_only(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Config, Mapping};

    fn boxed(mapping: Mapping) -> Box<dyn ConfigStore> {
        Box::new(Config::from_mapping(mapping, false))
    }

    #[test]
    fn test_store_get_and_set() {
        let mut store = boxed(Mapping::new());
        store
            .set(ConfigKey::from("name"), ConfigValue::from("demo"))
            .unwrap();
        assert_eq!(
            store.get(&ConfigKey::from("name")),
            Some(&ConfigValue::from("demo"))
        );
        assert!(store.exists(&ConfigKey::from("name")));
    }

    #[test]
    fn test_store_lock() {
        let mut store = boxed(Mapping::from([("a", 1)]));
        store.read_only();
        assert!(store.is_read_only());
        assert!(store
            .set(ConfigKey::from("a"), ConfigValue::from(2))
            .unwrap_err()
            .is_write_inhibited());
        assert!(store
            .remove(&ConfigKey::from("a"))
            .unwrap_err()
            .is_write_inhibited());
    }

    #[test]
    fn test_store_set_if_absent() {
        let mut store = boxed(Mapping::from([("a", 1)]));
        assert!(!store
            .set_if_absent(ConfigKey::from("a"), ConfigValue::from(2))
            .unwrap());
        assert!(store
            .set_if_absent(ConfigKey::from("b"), ConfigValue::from(2))
            .unwrap());
        assert_eq!(store.export().len(), 2);
    }
}
