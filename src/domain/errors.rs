// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when reading from or writing to
//! a configuration container. All errors use `thiserror` for proper error handling and
//! conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when writing to a locked
/// container or when reading a value as a specific type. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking backwards
/// compatibility.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::errors::ConfigError;
///
/// fn write_value() -> Result<(), ConfigError> {
///     Err(ConfigError::WriteInhibited {
///         key: "database.host".to_string(),
///     })
/// }
///
/// assert!(write_value().unwrap_err().is_write_inhibited());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A mutating operation was attempted on a read-only container.
    #[error("Current configuration prohibits writing (key: '{key}')")]
    WriteInhibited {
        /// The key that was being written or removed
        key: String,
    },

    /// The requested configuration key was not present.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The value stored at a key is not of the requested kind.
    #[error("Configuration value for key '{key}' is {found}, expected {expected}")]
    TypeMismatch {
        /// The key being read
        key: String,
        /// The kind of value the caller asked for
        expected: &'static str,
        /// The kind of value actually stored
        found: &'static str,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dotted path tried to descend through a value that is not a container.
    #[error("Configuration value at '{key}' is not a nested configuration")]
    NotAContainer {
        /// The path segment that holds the non-container value
        key: String,
    },
}

impl ConfigError {
    /// Creates a `WriteInhibited` error for the given key.
    pub fn write_inhibited(key: impl Into<String>) -> Self {
        ConfigError::WriteInhibited { key: key.into() }
    }

    /// Returns `true` if this error was caused by writing to a locked container.
    pub fn is_write_inhibited(&self) -> bool {
        matches!(self, ConfigError::WriteInhibited { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_inhibited_error() {
        let error = ConfigError::write_inhibited("app.name");
        assert_eq!(
            error.to_string(),
            "Current configuration prohibits writing (key: 'app.name')"
        );
        assert!(error.is_write_inhibited());
    }

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
        assert!(!error.is_write_inhibited());
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: "port".to_string(),
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            error.to_string(),
            "Configuration value for key 'port' is string, expected integer"
        );
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversionError {
            key: "test.key".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_not_a_container_error() {
        let error = ConfigError::NotAContainer {
            key: "database".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration value at 'database' is not a nested configuration"
        );
    }
}
