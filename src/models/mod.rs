//! Models module for the SDK
//!
//! Value types that make up a schema: models and their members, struct
//! types, twin properties and the schema itself.

pub mod action;
pub mod element;
pub mod metadata;
pub mod model;
pub mod property;
pub mod reference;
pub mod schema;
pub mod struct_type;
pub mod twin;

pub use action::{Action, Argument, ArgumentList, Method};
pub use element::{ElementList, Named};
pub use metadata::Metadata;
pub use model::{Model, ModelElement};
pub use property::{Property, PropertyList};
pub use reference::ModelReference;
pub use schema::{ModelId, Schema, SchemaId};
pub use struct_type::StructType;
pub use twin::{
    DeinitializeFn, DesiredProperty, DesiredPropertyCallbacks, FromAgentValueFn, InitializeFn,
    OnDesiredPropertyFn, ReportedProperty,
};
