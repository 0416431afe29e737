// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the configuration container and the value types it stores.
//! It is independent of any external concerns such as file formats or serialization.

pub mod config;
pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod object;
pub mod value;

// Re-export commonly used types
pub use config::Config;
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use object::Object;
pub use value::{Mapping, Value};
