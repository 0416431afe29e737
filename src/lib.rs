// SPDX-License-Identifier: MIT OR Apache-2.0

//! A nested, lockable in-memory configuration container.
//!
//! This crate provides [`Config`](domain::Config), a string-keyed store for structured
//! configuration values. Nested mappings written into it become nested containers, so a
//! whole configuration tree is read and written through a single interface and can be
//! exported back into plain data at any time.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The container and its value types (`Config`, `ConfigValue`,
//!   `Value`, `Mapping`, `Object`, errors)
//! - **Ports**: Traits application code plugs into (`Exportable`, `ConfigStore`)
//! - **Adapters**: Integration with external data formats (serde)
//!
//! # Features
//!
//! - **Key Coercion**: Integer keys and their string spelling address the same entry
//! - **Nesting**: Mappings become nested containers, reachable by dotted paths
//! - **Locking**: A container can be made read-only, together with everything it holds
//! - **Export**: Deep, non-mutating conversion back into a plain [`Mapping`](domain::Mapping)
//! - **Extensible**: Application objects join the export by implementing `Exportable`
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for configurations and values (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use nestcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let defaults = Mapping::from([
//!     ("name", Value::from("demo")),
//!     ("server", Value::from(Mapping::from([("port", 8080)]))),
//! ]);
//!
//! let mut config = Config::from_mapping(defaults, false);
//! config.set_path("server.host", "0.0.0.0")?;
//! config.read_only();
//!
//! assert_eq!(config.get_config("server")?.get_i64("port")?, 8080);
//! assert!(config.set("name", "other").is_err());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        Config, ConfigError, ConfigKey, ConfigValue, Mapping, Object, Result, Value,
    };
    pub use crate::ports::{ConfigStore, Exportable};
}
