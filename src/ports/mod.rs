// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits that define how application code and application
//! values plug into the configuration container.

pub mod exportable;
pub mod store;

// Re-export commonly used types
pub use exportable::Exportable;
pub use store::ConfigStore;
