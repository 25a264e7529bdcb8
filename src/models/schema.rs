//! Schema model
//!
//! A schema is a namespace-scoped catalog of device models and struct types.
//! It owns everything declared in it; dropping the schema drops its models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use super::element::ElementList;
use super::metadata::Metadata;
use super::model::Model;
use super::reference::ModelReference;
use super::struct_type::StructType;
use super::twin::OnDesiredPropertyFn;
use crate::config::RegistryConfig;
use crate::error::{ElementKind, SchemaError};
use crate::registry::path::{self, PathLeaf, PathTarget};
use crate::validation::{NamingRules, ReferenceValidator};

/// Identifier of a live schema
///
/// Every schema gets a fresh UUID, so two schemas created with the same
/// namespace never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(Uuid);

impl SchemaId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Handle to a model inside a schema
///
/// Models are only ever removed together with their schema, so the index
/// stays valid for as long as the schema lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId {
    pub(crate) schema: SchemaId,
    pub(crate) index: usize,
}

impl ModelId {
    /// Schema the model belongs to
    pub fn schema(&self) -> SchemaId {
        self.schema
    }

    /// Creation index of the model within its schema
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.schema, self.index)
    }
}

/// A namespaced collection of models and struct types
#[derive(Debug, Clone)]
pub struct Schema {
    id: SchemaId,
    namespace: String,
    metadata: Metadata,
    models: ElementList<Model>,
    struct_types: ElementList<StructType>,
    created_at: DateTime<Utc>,
    rules: NamingRules,
    reject_reference_cycles: bool,
}

impl Schema {
    pub(crate) fn new(namespace: &str, metadata: Metadata, config: &RegistryConfig) -> Self {
        Self {
            id: SchemaId::new(),
            namespace: namespace.to_string(),
            metadata,
            models: ElementList::new(),
            struct_types: ElementList::new(),
            created_at: Utc::now(),
            rules: config.naming_rules(),
            reject_reference_cycles: config.reject_reference_cycles,
        }
    }

    pub fn id(&self) -> SchemaId {
        self.id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The metadata supplied when the schema was created
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Models

    /// Create a model; model names are unique within the schema
    pub fn create_model(&mut self, name: &str) -> Result<ModelId, SchemaError> {
        self.rules.validate_name(ElementKind::Model, name)?;
        let id = ModelId {
            schema: self.id,
            index: self.models.len(),
        };
        self.models
            .insert(ElementKind::Model, Model::new(id, name, self.rules))?;
        debug!("Created model '{}' in schema '{}'", name, self.namespace);
        Ok(id)
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn model_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.models.get_mut(name)
    }

    pub fn model_id(&self, name: &str) -> Option<ModelId> {
        self.model(name).map(Model::id)
    }

    pub fn model_at(&self, index: usize) -> Option<&Model> {
        self.models.get_index(index)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn models(&self) -> &ElementList<Model> {
        &self.models
    }

    /// Resolve a handle; `None` when it belongs to another schema
    pub fn model_by_id(&self, id: ModelId) -> Option<&Model> {
        if id.schema != self.id {
            return None;
        }
        self.models.get_index(id.index)
    }

    pub fn model_by_id_mut(&mut self, id: ModelId) -> Option<&mut Model> {
        if id.schema != self.id {
            return None;
        }
        self.models.get_index_mut(id.index)
    }

    // Struct types

    /// Create a struct type; struct names are unique within the schema
    pub fn create_struct_type(&mut self, name: &str) -> Result<&mut StructType, SchemaError> {
        self.rules.validate_name(ElementKind::StructType, name)?;
        let struct_type = self
            .struct_types
            .insert(ElementKind::StructType, StructType::new(name, self.rules))?;
        debug!("Created struct type '{}' in schema '{}'", name, self.namespace);
        Ok(struct_type)
    }

    pub fn struct_type(&self, name: &str) -> Option<&StructType> {
        self.struct_types.get(name)
    }

    pub fn struct_type_mut(&mut self, name: &str) -> Option<&mut StructType> {
        self.struct_types.get_mut(name)
    }

    pub fn struct_type_at(&self, index: usize) -> Option<&StructType> {
        self.struct_types.get_index(index)
    }

    pub fn struct_type_count(&self) -> usize {
        self.struct_types.len()
    }

    pub fn struct_types(&self) -> &ElementList<StructType> {
        &self.struct_types
    }

    // Model references

    /// Make `child` a named member of `parent`
    ///
    /// Both models must belong to this schema. The reference name shares
    /// nothing with the child's model name; paths use the reference name.
    pub fn add_model_reference(
        &mut self,
        parent: ModelId,
        name: &str,
        child: ModelId,
        offset: usize,
        on_desired_property: Option<OnDesiredPropertyFn>,
    ) -> Result<(), SchemaError> {
        if parent.schema != self.id || child.schema != self.id {
            warn!(
                "Rejected model reference '{}' across schemas (target schema '{}')",
                name, self.namespace
            );
            return Err(SchemaError::InvalidArgument(format!(
                "model reference '{name}' must link models of the same schema"
            )));
        }
        self.rules.validate_name(ElementKind::ModelReference, name)?;

        let parent_model = self
            .models
            .get_index(parent.index)
            .ok_or_else(|| SchemaError::UnknownModel(parent.to_string()))?;
        if self.models.get_index(child.index).is_none() {
            return Err(SchemaError::UnknownModel(child.to_string()));
        }
        if parent_model.model_reference(name).is_some() {
            warn!(
                "Rejected duplicate model reference '{}' on model '{}'",
                name,
                parent_model.name()
            );
            return Err(SchemaError::duplicate(ElementKind::ModelReference, name));
        }

        if self.reject_reference_cycles {
            let edges = self.reference_edges();
            if let Some(cycle) = ReferenceValidator::new().check_circular_reference(
                &edges,
                parent.index,
                child.index,
            ) {
                let path: Vec<String> = cycle
                    .iter()
                    .filter_map(|&index| self.models.get_index(index))
                    .map(|model| model.name().to_string())
                    .collect();
                warn!("Rejected circular model reference: {}", path.join(" -> "));
                return Err(SchemaError::CircularReference { path });
            }
        }

        let parent_model = self
            .models
            .get_index_mut(parent.index)
            .ok_or_else(|| SchemaError::UnknownModel(parent.to_string()))?;
        parent_model.insert_model_reference(ModelReference::new(
            name,
            child,
            offset,
            on_desired_property,
        ))?;
        debug!(
            "Added model reference '{}' to model '{}'",
            name,
            parent_model.name()
        );
        Ok(())
    }

    /// Every `(parent, child)` model index pair linked by a reference
    fn reference_edges(&self) -> Vec<(usize, usize)> {
        self.models
            .iter()
            .enumerate()
            .flat_map(|(index, model)| {
                model
                    .model_references()
                    .iter()
                    .map(move |reference| (index, reference.model().index))
            })
            .collect()
    }

    // Paths

    /// Resolve a `/`-delimited path starting at `model`
    pub fn resolve_path(&self, model: ModelId, path: &str, leaf: PathLeaf) -> Option<PathTarget> {
        path::resolve(self, model, path, leaf)
    }

    pub fn model_property_by_path_exists(&self, model: ModelId, path: &str) -> bool {
        self.resolve_path(model, path, PathLeaf::Property).is_some()
    }

    pub fn model_reported_property_by_path_exists(&self, model: ModelId, path: &str) -> bool {
        self.resolve_path(model, path, PathLeaf::ReportedProperty)
            .is_some()
    }

    pub fn model_desired_property_by_path_exists(&self, model: ModelId, path: &str) -> bool {
        self.resolve_path(model, path, PathLeaf::DesiredProperty)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new("Contoso", Metadata::new(()), &RegistryConfig::default())
    }

    #[test]
    fn test_schema_ids_are_unique() {
        let a = schema();
        let b = schema();
        assert_eq!(a.namespace(), b.namespace());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_create_models() {
        let mut schema = schema();
        let truck = schema.create_model("Truck").unwrap();
        let car = schema.create_model("Car").unwrap();

        assert_eq!(truck.index(), 0);
        assert_eq!(car.index(), 1);
        assert_eq!(schema.model_count(), 2);
        assert_eq!(schema.model_id("Car"), Some(car));
        assert_eq!(schema.model_at(0).unwrap().name(), "Truck");
        assert!(schema.model_at(2).is_none());
        assert!(schema.model("Bike").is_none());

        let err = schema.create_model("Car").unwrap_err();
        assert_eq!(err, SchemaError::duplicate(ElementKind::Model, "Car"));
        assert!(schema.create_model("").is_err());
    }

    #[test]
    fn test_model_by_id_checks_schema() {
        let mut first = schema();
        let second = schema();
        let id = first.create_model("Truck").unwrap();

        assert!(first.model_by_id(id).is_some());
        assert!(second.model_by_id(id).is_none());
        first.model_by_id_mut(id).unwrap().add_property("speed", "int").unwrap();
        assert_eq!(first.model("Truck").unwrap().property_count(), 1);
    }

    #[test]
    fn test_struct_types() {
        let mut schema = schema();
        schema
            .create_struct_type("GeoLocation")
            .unwrap()
            .add_property("lat", "double")
            .unwrap();

        assert!(schema.create_struct_type("GeoLocation").is_err());
        assert_eq!(schema.struct_type_count(), 1);
        assert_eq!(schema.struct_type_at(0).unwrap().property_count(), 1);
        assert!(schema.struct_type_at(1).is_none());
        schema
            .struct_type_mut("GeoLocation")
            .unwrap()
            .add_property("long", "double")
            .unwrap();
        assert_eq!(schema.struct_type("GeoLocation").unwrap().property_count(), 2);
    }

    #[test]
    fn test_model_reference_rules() {
        let mut schema = schema();
        let truck = schema.create_model("Truck").unwrap();
        let engine = schema.create_model("Engine").unwrap();

        schema.add_model_reference(truck, "engine", engine, 24, None).unwrap();

        let err = schema
            .add_model_reference(truck, "engine", engine, 0, None)
            .unwrap_err();
        assert_eq!(err, SchemaError::duplicate(ElementKind::ModelReference, "engine"));

        let err = schema
            .add_model_reference(engine, "truck", truck, 0, None)
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::CircularReference {
                path: vec!["Engine".into(), "Truck".into(), "Engine".into()]
            }
        );

        let model = schema.model("Truck").unwrap();
        assert_eq!(model.model_reference_count(), 1);
        assert_eq!(model.model_reference_offset("engine"), Some(24));
        assert_eq!(model.model_reference("engine").unwrap().model(), engine);
    }

    #[test]
    fn test_model_reference_across_schemas_fails() {
        let mut first = schema();
        let mut second = schema();
        let truck = first.create_model("Truck").unwrap();
        let engine = second.create_model("Engine").unwrap();

        assert!(matches!(
            first.add_model_reference(truck, "engine", engine, 0, None),
            Err(SchemaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cycles_allowed_when_disabled() {
        let config = RegistryConfig::builder().reject_reference_cycles(false).build();
        let mut schema = Schema::new("Contoso", Metadata::new(()), &config);
        let node = schema.create_model("Node").unwrap();

        schema.add_model_reference(node, "next", node, 0, None).unwrap();
        assert_eq!(schema.model("Node").unwrap().model_reference_count(), 1);
    }
}
