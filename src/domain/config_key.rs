// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype with string coercion.
//!
//! This module provides the `ConfigKey` type. Every key handed to a container is
//! coerced to its string form through `ConfigKey`, so integer keys and their decimal
//! string spelling address the same entry.

use std::fmt;

/// A configuration key, always held in its string form.
///
/// `ConfigKey` can be built from string slices, owned strings, characters and any
/// primitive integer. Container methods accept `impl Into<ConfigKey>`, which is where
/// the coercion happens.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
///
/// assert_eq!(ConfigKey::from(1), ConfigKey::from("1"));
/// assert_eq!(ConfigKey::from(-7i64).as_str(), "-7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("app.name".to_string());
    /// assert_eq!(key.as_str(), "app.name");
    /// ```
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits a dotted path into its segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("database.primary.host");
    /// let segments: Vec<&str> = key.segments().collect();
    /// assert_eq!(segments, vec!["database", "primary", "host"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&String> for ConfigKey {
    fn from(s: &String) -> Self {
        ConfigKey(s.clone())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<char> for ConfigKey {
    fn from(c: char) -> Self {
        ConfigKey(c.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigKey {
                fn from(n: $ty) -> Self {
                    ConfigKey(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
