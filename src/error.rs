//! Error types for schema registry operations

use std::fmt;
use thiserror::Error;

use crate::models::SchemaId;

/// Kind of element held by a schema or one of its containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Model,
    StructType,
    Property,
    Action,
    Method,
    Argument,
    ModelReference,
    ReportedProperty,
    DesiredProperty,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Model => "model",
            ElementKind::StructType => "struct type",
            ElementKind::Property => "property",
            ElementKind::Action => "action",
            ElementKind::Method => "method",
            ElementKind::Argument => "argument",
            ElementKind::ModelReference => "model reference",
            ElementKind::ReportedProperty => "reported property",
            ElementKind::DesiredProperty => "desired property",
        };
        f.write_str(name)
    }
}

/// Errors returned by schema, model and registry mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An argument was empty, malformed or referred to the wrong schema
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An element with the same name already exists in its container
    #[error("Duplicate {kind}: '{name}'")]
    DuplicateElement { kind: ElementKind, name: String },

    /// The schema handle does not refer to a live schema
    #[error("Unknown schema: {0}")]
    UnknownSchema(SchemaId),

    /// The model handle does not refer to a live model
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Teardown refused because a model still has device references
    #[error("Model '{0}' is still referenced by devices")]
    ModelInUse(String),

    /// A device reference was released on a model with none outstanding
    #[error("Model '{0}' has no device references to release")]
    DeviceCountZero(String),

    /// The model reference would make a model contain itself
    #[error("Circular model reference: {}", path.join(" -> "))]
    CircularReference { path: Vec<String> },
}

impl SchemaError {
    pub(crate) fn duplicate(kind: ElementKind, name: &str) -> Self {
        SchemaError::DuplicateElement {
            kind,
            name: name.to_string(),
        }
    }
}

/// Errors raised by desired property conversion callbacks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The incoming value does not have the expected JSON shape
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The destination does not have the type the callback writes to
    #[error("Invalid destination for property '{0}'")]
    InvalidDestination(String),

    /// The value could not be converted
    #[error("Conversion failed: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(e: serde_json::Error) -> Self {
        ConversionError::Invalid(e.to_string())
    }
}
