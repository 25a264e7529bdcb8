//! Struct type model for the SDK

use tracing::debug;

use super::element::Named;
use super::property::{Property, PropertyList};
use crate::error::{ElementKind, SchemaError};
use crate::validation::NamingRules;

/// A named composite type declared by a schema
///
/// Struct types own their own property collection; models refer to them by
/// using the struct name as a property type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    name: String,
    properties: PropertyList,
    rules: NamingRules,
}

impl StructType {
    pub(crate) fn new(name: &str, rules: NamingRules) -> Self {
        Self {
            name: name.to_string(),
            properties: PropertyList::new(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a property; property names are unique within the struct type
    pub fn add_property(&mut self, name: &str, data_type: &str) -> Result<(), SchemaError> {
        self.rules
            .validate_typed(ElementKind::Property, name, data_type)?;
        self.properties
            .insert(ElementKind::Property, Property::new(name, data_type))?;
        debug!("Added property '{}' to struct type '{}'", name, self.name);
        Ok(())
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn property_at(&self, index: usize) -> Option<&Property> {
        self.properties.get_index(index)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn properties(&self) -> &PropertyList {
        &self.properties
    }
}

impl Named for StructType {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_properties() {
        let mut location = StructType::new("GeoLocation", NamingRules::default());
        location.add_property("lat", "double").unwrap();
        location.add_property("long", "double").unwrap();

        assert_eq!(location.name(), "GeoLocation");
        assert_eq!(location.property_count(), 2);
        assert_eq!(location.property("long").unwrap().data_type, "double");
        assert_eq!(location.property_at(0).unwrap().name, "lat");
        assert!(location.property_at(2).is_none());
    }

    #[test]
    fn test_struct_duplicate_property_with_other_type_fails() {
        let mut location = StructType::new("GeoLocation", NamingRules::default());
        location.add_property("lat", "double").unwrap();
        location.add_property("long", "double").unwrap();

        assert!(location.add_property("long", "float").is_err());
        assert_eq!(location.property_count(), 2);
    }
}
