//! Opaque schema metadata

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied value attached to a schema at creation
///
/// The registry never looks inside; it hands the same value back from
/// [`Schema::metadata`](crate::models::Schema::metadata). Clones share the
/// underlying allocation.
#[derive(Clone)]
pub struct Metadata {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Metadata {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Wrap an existing shared value without copying it
    pub fn from_arc(inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self { inner }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// True when both handles point at the same value
    pub fn ptr_eq(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata").finish_non_exhaustive()
    }
}
