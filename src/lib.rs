//! Device Schema SDK - In-memory registry of device schemas
//!
//! Provides:
//! - Schemas grouping device models and struct types under a namespace
//! - Models with properties, actions, methods, nested model references and
//!   reported/desired twin properties
//! - Device reference counting that gates schema teardown
//! - `/`-delimited path resolution across nested models
//! - JSON/YAML descriptions of schemas
//!
//! # Example
//!
//! ```rust
//! use device_schema_sdk::{Metadata, SchemaRegistry};
//!
//! let mut registry = SchemaRegistry::new();
//! let schema = registry.create_schema("Contoso", Metadata::new(())).unwrap();
//! let truck = registry.create_model(schema, "Truck").unwrap();
//! let engine = registry.create_model(schema, "Engine").unwrap();
//!
//! registry.model_mut(engine).unwrap().add_property("rpm", "int").unwrap();
//! registry.add_model_reference(truck, "engine", engine, 0, None).unwrap();
//!
//! assert!(registry.model_property_by_path_exists(truck, "engine/rpm"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod validation;

pub use config::{RegistryConfig, RegistryConfigBuilder};
pub use error::{ConversionError, ElementKind, SchemaError};
pub use export::SchemaDescription;
pub use registry::{PathLeaf, PathTarget, SchemaRegistry, registry_read, registry_write};

// Re-export models
pub use models::{
    Action, Argument, DesiredProperty, DesiredPropertyCallbacks, Metadata, Method, Model,
    ModelElement, ModelId, ModelReference, Property, ReportedProperty, Schema, SchemaId,
    StructType,
};
