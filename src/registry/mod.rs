//! Schema registry
//!
//! [`SchemaRegistry`] owns every live schema and resolves the handles
//! ([`SchemaId`], [`ModelId`]) callers hold on to. Handles of a destroyed
//! schema go stale: lookups return `None` and mutations fail with
//! [`SchemaError::UnknownSchema`].

pub mod global;
pub mod path;

pub use global::{registry_read, registry_write};
pub use path::{PathLeaf, PathTarget};

use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::SchemaError;
use crate::export::SchemaDescription;
use crate::models::{Metadata, Model, ModelId, OnDesiredPropertyFn, Schema, SchemaId};
use crate::validation::naming::validate_namespace;

/// Catalog of live schemas, in creation order
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    config: RegistryConfig,
    schemas: Vec<Schema>,
}

impl SchemaRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            schemas: Vec::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Replace the configuration; existing schemas keep the rules they were
    /// created with
    pub fn set_config(&mut self, config: RegistryConfig) {
        self.config = config;
    }

    // Schemas

    /// Create a schema; namespaces need not be unique
    pub fn create_schema(
        &mut self,
        namespace: &str,
        metadata: Metadata,
    ) -> Result<SchemaId, SchemaError> {
        validate_namespace(namespace)?;
        let schema = Schema::new(namespace, metadata, &self.config);
        let id = schema.id();
        self.schemas.push(schema);
        info!("Created schema '{}' ({})", namespace, id);
        Ok(id)
    }

    /// Destroy a schema together with its models and struct types
    pub fn destroy_schema(&mut self, id: SchemaId) -> Result<(), SchemaError> {
        let position = self
            .schemas
            .iter()
            .position(|schema| schema.id() == id)
            .ok_or(SchemaError::UnknownSchema(id))?;
        let schema = self.schemas.remove(position);
        info!(
            "Destroyed schema '{}' ({}) with {} models",
            schema.namespace(),
            id,
            schema.model_count()
        );
        Ok(())
    }

    /// Destroy every schema
    pub fn clear(&mut self) {
        let count = self.schemas.len();
        self.schemas.clear();
        info!("Destroyed all {} schemas", count);
    }

    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter()
    }

    pub fn schema(&self, id: SchemaId) -> Option<&Schema> {
        self.schemas.iter().find(|schema| schema.id() == id)
    }

    pub fn schema_mut(&mut self, id: SchemaId) -> Option<&mut Schema> {
        self.schemas.iter_mut().find(|schema| schema.id() == id)
    }

    /// First schema created with the given namespace
    pub fn schema_by_namespace(&self, namespace: &str) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|schema| schema.namespace() == namespace)
    }

    /// First schema that declares a model with the given name
    pub fn schema_for_model(&self, model_name: &str) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|schema| schema.model(model_name).is_some())
    }

    /// Schema owning the model behind a handle
    pub fn schema_for_model_type(&self, model: ModelId) -> Option<&Schema> {
        self.schema(model.schema())
            .filter(|schema| schema.model_by_id(model).is_some())
    }

    // Models

    pub fn create_model(&mut self, schema: SchemaId, name: &str) -> Result<ModelId, SchemaError> {
        self.schema_mut(schema)
            .ok_or(SchemaError::UnknownSchema(schema))?
            .create_model(name)
    }

    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.schema(id.schema())?.model_by_id(id)
    }

    pub fn model_mut(&mut self, id: ModelId) -> Option<&mut Model> {
        self.schema_mut(id.schema())?.model_by_id_mut(id)
    }

    pub fn model_name(&self, id: ModelId) -> Option<&str> {
        self.model(id).map(Model::name)
    }

    /// Link `child` into `parent` under `name`; see [`Schema::add_model_reference`]
    pub fn add_model_reference(
        &mut self,
        parent: ModelId,
        name: &str,
        child: ModelId,
        offset: usize,
        on_desired_property: Option<OnDesiredPropertyFn>,
    ) -> Result<(), SchemaError> {
        self.schema_mut(parent.schema())
            .ok_or(SchemaError::UnknownSchema(parent.schema()))?
            .add_model_reference(parent, name, child, offset, on_desired_property)
    }

    /// Model a named reference of `parent` points to
    pub fn model_reference_target(&self, parent: ModelId, name: &str) -> Option<ModelId> {
        self.model(parent)?
            .model_reference(name)
            .map(|reference| reference.model())
    }

    // Device references

    pub fn add_device_ref(&mut self, id: ModelId) -> Result<usize, SchemaError> {
        Ok(self.live_model_mut(id)?.add_device_ref())
    }

    pub fn release_device_ref(&mut self, id: ModelId) -> Result<usize, SchemaError> {
        self.live_model_mut(id)?.release_device_ref()
    }

    /// Destroy the model's schema once no model in it has devices
    ///
    /// Fails with [`SchemaError::ModelInUse`] while any model of the schema
    /// holds device references. Calling it again after the schema is gone
    /// succeeds without doing anything.
    pub fn destroy_if_unused(&mut self, id: ModelId) -> Result<(), SchemaError> {
        let Some(schema) = self.schema(id.schema()) else {
            debug!("Schema of model {} is already destroyed", id);
            return Ok(());
        };
        if schema.model_by_id(id).is_none() {
            return Err(SchemaError::UnknownModel(id.to_string()));
        }
        if let Some(busy) = schema.models().iter().find(|model| model.device_count() > 0) {
            warn!(
                "Schema '{}' kept alive: model '{}' has {} devices",
                schema.namespace(),
                busy.name(),
                busy.device_count()
            );
            return Err(SchemaError::ModelInUse(busy.name().to_string()));
        }

        self.destroy_schema(id.schema())
    }

    fn live_model_mut(&mut self, id: ModelId) -> Result<&mut Model, SchemaError> {
        self.schema_mut(id.schema())
            .ok_or(SchemaError::UnknownSchema(id.schema()))?
            .model_by_id_mut(id)
            .ok_or_else(|| SchemaError::UnknownModel(id.to_string()))
    }

    // Paths

    /// Resolve a path starting at `model`; `None` for stale handles
    pub fn resolve_path(&self, model: ModelId, path: &str, leaf: PathLeaf) -> Option<PathTarget> {
        let target = self.schema(model.schema())?.resolve_path(model, path, leaf);
        debug!(
            "Resolved {} path '{}' on {}: {:?}",
            leaf.kind(),
            path,
            model,
            target
        );
        target
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

    // Export

    /// Serializable snapshot of a schema
    pub fn describe(&self, id: SchemaId) -> Option<SchemaDescription> {
        self.schema(id).map(SchemaDescription::from_schema)
    }
}
