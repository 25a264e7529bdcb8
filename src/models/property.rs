//! Property model for the SDK

use serde::{Deserialize, Serialize};

use super::element::{ElementList, Named};

/// A named, typed value held by a model or a struct type
///
/// # Example
///
/// ```rust
/// use device_schema_sdk::models::Property;
///
/// let property = Property::new("temperature", "double");
/// assert_eq!(property.data_type, "double");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name, unique within its model or struct type
    pub name: String,
    /// Type name (e.g. "int", "double", or a struct type name)
    #[serde(rename = "type")]
    pub data_type: String,
}

impl Property {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

impl Named for Property {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered properties of a model or struct type
pub type PropertyList = ElementList<Property>;
