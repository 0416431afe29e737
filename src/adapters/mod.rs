// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer connecting the container to external data formats.
//!
//! The container never parses files itself. Adapters here let already-parsed data from
//! other crates flow in and out of it.

#[cfg(feature = "serde")]
pub mod serialization;
