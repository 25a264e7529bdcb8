//! Process-wide schema registry
//!
//! Code that cannot thread a [`SchemaRegistry`] through its call chain can
//! share this one. A panic while the lock is held does not poison it for
//! other callers.

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::SchemaRegistry;

static GLOBAL_REGISTRY: Lazy<RwLock<SchemaRegistry>> =
    Lazy::new(|| RwLock::new(SchemaRegistry::new()));

/// Shared access to the global registry
pub fn registry_read() -> RwLockReadGuard<'static, SchemaRegistry> {
    GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive access to the global registry
pub fn registry_write() -> RwLockWriteGuard<'static, SchemaRegistry> {
    GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}
