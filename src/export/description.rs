//! Schema description
//!
//! A plain serde view of a schema for inspection and export. Callbacks have
//! no serialized form and appear only as presence flags; schema metadata is
//! left out entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    Action, Argument, Method, Model, ModelReference, Property, ReportedProperty, Schema, SchemaId,
    StructType,
};

/// Snapshot of a schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    pub id: SchemaId,
    pub namespace: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub models: Vec<ModelDescription>,
    #[serde(default)]
    pub struct_types: Vec<StructTypeDescription>,
}

/// Snapshot of one model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescription {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub actions: Vec<CommandDescription>,
    #[serde(default)]
    pub methods: Vec<CommandDescription>,
    #[serde(default)]
    pub model_references: Vec<ModelReferenceDescription>,
    #[serde(default)]
    pub reported_properties: Vec<ReportedProperty>,
    #[serde(default)]
    pub desired_properties: Vec<DesiredPropertyDescription>,
    #[serde(default)]
    pub device_count: usize,
}

/// Action or method with its arguments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandDescription {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelReferenceDescription {
    pub name: String,
    /// Name of the referenced model
    pub model: String,
    pub offset: usize,
    #[serde(default)]
    pub has_on_desired_property: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesiredPropertyDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub offset: usize,
    #[serde(default)]
    pub has_on_desired_property: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructTypeDescription {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl SchemaDescription {
    /// Capture the current state of a schema
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            id: schema.id(),
            namespace: schema.namespace().to_string(),
            created_at: schema.created_at(),
            models: schema
                .models()
                .iter()
                .map(|model| ModelDescription::from_model(schema, model))
                .collect(),
            struct_types: schema
                .struct_types()
                .iter()
                .map(StructTypeDescription::from_struct_type)
                .collect(),
        }
    }

    /// Find a model description by name
    pub fn model(&self, name: &str) -> Option<&ModelDescription> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Import a description from YAML
    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml_content)
    }

    /// Export the description to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Import a description from JSON
    pub fn from_json(json_content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_content)
    }

    /// Export the description to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Export the description to pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ModelDescription {
    fn from_model(schema: &Schema, model: &Model) -> Self {
        Self {
            name: model.name().to_string(),
            properties: model.properties().iter().cloned().collect(),
            actions: model.actions().iter().map(CommandDescription::from_action).collect(),
            methods: model.methods().iter().map(CommandDescription::from_method).collect(),
            model_references: model
                .model_references()
                .iter()
                .map(|reference| ModelReferenceDescription::from_reference(schema, reference))
                .collect(),
            reported_properties: model.reported_properties().iter().cloned().collect(),
            desired_properties: model
                .desired_properties()
                .iter()
                .map(|property| DesiredPropertyDescription {
                    name: property.name().to_string(),
                    data_type: property.data_type().to_string(),
                    offset: property.offset(),
                    has_on_desired_property: property.on_desired_property().is_some(),
                })
                .collect(),
            device_count: model.device_count(),
        }
    }
}

impl CommandDescription {
    fn from_action(action: &Action) -> Self {
        Self {
            name: action.name().to_string(),
            arguments: action.arguments().iter().cloned().collect(),
        }
    }

    fn from_method(method: &Method) -> Self {
        Self {
            name: method.name().to_string(),
            arguments: method.arguments().iter().cloned().collect(),
        }
    }
}

impl ModelReferenceDescription {
    fn from_reference(schema: &Schema, reference: &ModelReference) -> Self {
        let model = schema
            .model_by_id(reference.model())
            .map(|model| model.name().to_string())
            .unwrap_or_default();
        Self {
            name: reference.name().to_string(),
            model,
            offset: reference.offset(),
            has_on_desired_property: reference.on_desired_property().is_some(),
        }
    }
}

impl StructTypeDescription {
    fn from_struct_type(struct_type: &StructType) -> Self {
        Self {
            name: struct_type.name().to_string(),
            properties: struct_type.properties().iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::models::Metadata;
    use std::any::Any;

    fn notify(_: &mut dyn Any) {}

    fn sample() -> Schema {
        let mut schema = Schema::new("Contoso", Metadata::new(()), &RegistryConfig::default());
        let truck = schema.create_model("Truck").unwrap();
        let engine = schema.create_model("Engine").unwrap();
        schema
            .model_by_id_mut(truck)
            .unwrap()
            .create_action("honk")
            .unwrap()
            .add_argument("seconds", "int")
            .unwrap();
        schema
            .model_by_id_mut(engine)
            .unwrap()
            .add_reported_property("rpm", "int")
            .unwrap();
        schema
            .add_model_reference(truck, "engine", engine, 8, Some(notify))
            .unwrap();
        schema
            .create_struct_type("GeoLocation")
            .unwrap()
            .add_property("lat", "double")
            .unwrap();
        schema
    }

    #[test]
    fn test_from_schema() {
        let description = SchemaDescription::from_schema(&sample());
        assert_eq!(description.namespace, "Contoso");
        assert_eq!(description.models.len(), 2);
        assert_eq!(description.struct_types[0].properties[0].name, "lat");

        let truck = description.model("Truck").unwrap();
        assert_eq!(truck.actions[0].arguments[0].data_type, "int");
        assert_eq!(truck.model_references[0].model, "Engine");
        assert!(truck.model_references[0].has_on_desired_property);
        assert_eq!(
            description.model("Engine").unwrap().reported_properties[0].name,
            "rpm"
        );
    }

    #[test]
    fn test_json_uses_camel_case_and_type_key() {
        let json = SchemaDescription::from_schema(&sample()).to_json().unwrap();
        assert!(json.contains("\"structTypes\""));
        assert!(json.contains("\"modelReferences\""));
        assert!(json.contains("\"type\":\"double\""));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let description = SchemaDescription::from_schema(&sample());
        let yaml = description.to_yaml().unwrap();
        assert_eq!(SchemaDescription::from_yaml(&yaml).unwrap(), description);
    }
}
