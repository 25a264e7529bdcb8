//! Export functionality
//!
//! Serializable descriptions of schemas (JSON and YAML).

pub mod description;

pub use description::{
    CommandDescription, DesiredPropertyDescription, ModelDescription, ModelReferenceDescription,
    SchemaDescription, StructTypeDescription,
};
