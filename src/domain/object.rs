// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque application objects stored inside a configuration.

use crate::domain::Mapping;
use crate::ports::Exportable;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

type ExportFn = fn(&(dyn Any + Send + Sync)) -> Mapping;

fn export_as<T: Exportable + Any>(value: &(dyn Any + Send + Sync)) -> Mapping {
    value
        .downcast_ref::<T>()
        .map(Exportable::export)
        .unwrap_or_default()
}

/// A shared handle to an arbitrary application value.
///
/// Objects are stored and exported as-is: cloning an `Object` clones the handle, not
/// the value behind it, and two objects compare equal only when they point at the same
/// allocation. An object built with [`Object::exportable`] is exported through its
/// [`Exportable`] implementation instead.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::Object;
///
/// #[derive(Debug, PartialEq)]
/// struct Pool { size: usize }
///
/// let object = Object::new(Pool { size: 4 });
/// assert_eq!(object.downcast_ref::<Pool>(), Some(&Pool { size: 4 }));
/// assert!(object.downcast_ref::<String>().is_none());
/// assert!(!object.is_exportable());
/// ```
#[derive(Clone)]
pub struct Object {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    exporter: Option<ExportFn>,
}

impl Object {
    /// Wraps a value as an opaque object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Object {
            inner: value,
            type_name: type_name::<T>(),
            exporter: None,
        }
    }

    /// Wraps a value that exports itself to a mapping.
    pub fn exportable<T: Exportable + Any + Send + Sync>(value: T) -> Self {
        Object {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
            exporter: Some(export_as::<T> as ExportFn),
        }
    }

    /// Returns a reference to the inner value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns `true` if the inner value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// The Rust type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if this object participates in export.
    pub fn is_exportable(&self) -> bool {
        self.exporter.is_some()
    }

    /// Exports the wrapped value, or `None` for a purely opaque object.
    pub fn export(&self) -> Option<Mapping> {
        self.exporter.map(|export| export(&*self.inner))
    }

    /// Returns `true` if both handles point at the same value.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name).finish()
    }
}
