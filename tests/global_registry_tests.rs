//! Process-wide registry tests
//!
//! Tests in this file share one registry; each uses its own namespace and
//! never asserts on global totals.

use device_schema_sdk::{Metadata, registry_read, registry_write};
use std::thread;

#[test]
fn test_global_registry_shares_schemas() {
    let id = registry_write()
        .create_schema("GlobalShared", Metadata::new(()))
        .unwrap();

    let seen = thread::spawn(move || registry_read().schema(id).map(|s| s.namespace().to_string()))
        .join()
        .unwrap();
    assert_eq!(seen.as_deref(), Some("GlobalShared"));

    registry_write().destroy_schema(id).unwrap();
    assert!(registry_read().schema(id).is_none());
}

#[test]
fn test_global_registry_concurrent_writers() {
    let handles: Vec<_> = (0..4usize)
        .map(|n| {
            thread::spawn(move || {
                let mut registry = registry_write();
                let id = registry
                    .create_schema(&format!("GlobalWriter{n}"), Metadata::new(n))
                    .unwrap();
                registry.create_model(id, "Device").unwrap();
                id
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (n, id) in ids.iter().enumerate() {
        let registry = registry_read();
        let schema = registry.schema(*id).unwrap();
        assert_eq!(schema.namespace(), format!("GlobalWriter{n}"));
        assert_eq!(schema.metadata().downcast_ref::<usize>(), Some(&n));
        assert!(schema.model("Device").is_some());
    }

    let mut registry = registry_write();
    for id in ids {
        registry.destroy_schema(id).unwrap();
    }
}
