// SPDX-License-Identifier: MIT OR Apache-2.0

//! Export-to-mapping capability.
//!
//! This module defines the `Exportable` trait. A configuration container walks its
//! entries during export and asks every value that has this capability to turn itself
//! into a plain [`Mapping`].

use crate::domain::Mapping;

/// A value that can convert itself into a plain nested mapping.
///
/// [`Config`](crate::domain::Config) implements this trait, which is how nested
/// containers become nested mappings on export. Application types opt in by
/// implementing it and wrapping themselves with
/// [`Object::exportable`](crate::domain::Object::exportable).
///
/// Implementations must be pure: exporting twice yields equal mappings and leaves
/// the value untouched.
///
/// # Examples
///
/// ```rust
/// use nestcfg::domain::{Config, Mapping, Object, Value};
/// use nestcfg::ports::Exportable;
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl Exportable for Endpoint {
///     fn export(&self) -> Mapping {
///         Mapping::from([
///             ("host", Value::from(self.host.as_str())),
///             ("port", Value::from(self.port)),
///         ])
///     }
/// }
///
/// let mut config = Config::new();
/// let endpoint = Endpoint { host: "localhost".into(), port: 8080 };
/// config.set("endpoint", Object::exportable(endpoint)).unwrap();
///
/// let exported = config.export();
/// let endpoint = exported.get("endpoint").and_then(Value::as_map).unwrap();
/// assert_eq!(endpoint.get("port"), Some(&Value::Integer(8080)));
/// ```
pub trait Exportable {
    /// Converts this value into a plain nested mapping.
    fn export(&self) -> Mapping;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    struct Fixed;

    impl Exportable for Fixed {
        fn export(&self) -> Mapping {
            Mapping::from([("fixed", Value::Bool(true))])
        }
    }

    #[test]
    fn test_export_is_repeatable() {
        let value = Fixed;
        assert_eq!(value.export(), value.export());
    }

    #[test]
    fn test_exportable_is_object_safe() {
        let boxed: Box<dyn Exportable> = Box::new(Fixed);
        assert_eq!(boxed.export().len(), 1);
    }
}
