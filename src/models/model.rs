//! Device model
//!
//! A model is the shape of one kind of device: its properties, the actions
//! and methods it accepts, the twin properties it reports and accepts, and
//! references to nested models. Models live inside a [`Schema`](super::Schema)
//! and are addressed through a [`ModelId`].

use tracing::{debug, warn};

use super::action::{Action, Method};
use super::element::{ElementList, Named};
use super::property::{Property, PropertyList};
use super::reference::ModelReference;
use super::schema::ModelId;
use super::twin::{DesiredProperty, OnDesiredPropertyFn, ReportedProperty};
use crate::error::{ElementKind, SchemaError};
use crate::validation::NamingRules;

/// Result of looking a name up across every collection of a model
#[derive(Debug, Clone, Copy)]
pub enum ModelElement<'a> {
    ModelReference(&'a ModelReference),
    Property(&'a Property),
    ReportedProperty(&'a ReportedProperty),
    DesiredProperty(&'a DesiredProperty),
    Action(&'a Action),
    Method(&'a Method),
}

impl ModelElement<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            ModelElement::ModelReference(_) => ElementKind::ModelReference,
            ModelElement::Property(_) => ElementKind::Property,
            ModelElement::ReportedProperty(_) => ElementKind::ReportedProperty,
            ModelElement::DesiredProperty(_) => ElementKind::DesiredProperty,
            ModelElement::Action(_) => ElementKind::Action,
            ModelElement::Method(_) => ElementKind::Method,
        }
    }
}

/// A device model
#[derive(Debug, Clone)]
pub struct Model {
    id: ModelId,
    name: String,
    properties: PropertyList,
    actions: ElementList<Action>,
    methods: ElementList<Method>,
    model_references: ElementList<ModelReference>,
    reported_properties: ElementList<ReportedProperty>,
    desired_properties: ElementList<DesiredProperty>,
    device_count: usize,
    rules: NamingRules,
}

impl Model {
    pub(crate) fn new(id: ModelId, name: &str, rules: NamingRules) -> Self {
        Self {
            id,
            name: name.to_string(),
            properties: PropertyList::new(),
            actions: ElementList::new(),
            methods: ElementList::new(),
            model_references: ElementList::new(),
            reported_properties: ElementList::new(),
            desired_properties: ElementList::new(),
            device_count: 0,
            rules,
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Properties

    /// Add a property; fails when the name is taken, whatever its type
    pub fn add_property(&mut self, name: &str, data_type: &str) -> Result<(), SchemaError> {
        self.rules
            .validate_typed(ElementKind::Property, name, data_type)?;
        self.properties
            .insert(ElementKind::Property, Property::new(name, data_type))?;
        debug!("Added property '{}' to model '{}'", name, self.name);
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

    // Actions

    /// Create an action and return it for adding arguments
    pub fn create_action(&mut self, name: &str) -> Result<&mut Action, SchemaError> {
        self.rules.validate_name(ElementKind::Action, name)?;
        let action = self
            .actions
            .insert(ElementKind::Action, Action::new(name, self.rules))?;
        debug!("Created action '{}' on model '{}'", name, self.name);
        Ok(action)
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    pub fn action_mut(&mut self, name: &str) -> Option<&mut Action> {
        self.actions.get_mut(name)
    }

    pub fn action_at(&self, index: usize) -> Option<&Action> {
        self.actions.get_index(index)
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn actions(&self) -> &ElementList<Action> {
        &self.actions
    }

    // Methods

    /// Create a method and return it for adding arguments
    pub fn create_method(&mut self, name: &str) -> Result<&mut Method, SchemaError> {
        self.rules.validate_name(ElementKind::Method, name)?;
        let method = self
            .methods
            .insert(ElementKind::Method, Method::new(name, self.rules))?;
        debug!("Created method '{}' on model '{}'", name, self.name);
        Ok(method)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.get_mut(name)
    }

    pub fn method_at(&self, index: usize) -> Option<&Method> {
        self.methods.get_index(index)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn methods(&self) -> &ElementList<Method> {
        &self.methods
    }

    // Model references

    /// Insert a reference already checked against the owning schema
    pub(crate) fn insert_model_reference(
        &mut self,
        reference: ModelReference,
    ) -> Result<(), SchemaError> {
        self.model_references
            .insert(ElementKind::ModelReference, reference)?;
        Ok(())
    }

    pub fn model_reference(&self, name: &str) -> Option<&ModelReference> {
        self.model_references.get(name)
    }

    pub fn model_reference_at(&self, index: usize) -> Option<&ModelReference> {
        self.model_references.get_index(index)
    }

    pub fn model_reference_count(&self) -> usize {
        self.model_references.len()
    }

    pub fn model_reference_offset(&self, name: &str) -> Option<usize> {
        self.model_reference(name).map(ModelReference::offset)
    }

    pub fn model_reference_offset_at(&self, index: usize) -> Option<usize> {
        self.model_reference_at(index).map(ModelReference::offset)
    }

    pub fn model_reference_name_at(&self, index: usize) -> Option<&str> {
        self.model_reference_at(index).map(ModelReference::name)
    }

    /// Notification callback of the named reference, if it has one
    pub fn model_reference_on_desired_property(&self, name: &str) -> Option<OnDesiredPropertyFn> {
        self.model_reference(name)
            .and_then(ModelReference::on_desired_property)
    }

    pub fn model_references(&self) -> &ElementList<ModelReference> {
        &self.model_references
    }

    // Reported properties

    pub fn add_reported_property(&mut self, name: &str, data_type: &str) -> Result<(), SchemaError> {
        self.rules
            .validate_typed(ElementKind::ReportedProperty, name, data_type)?;
        self.reported_properties.insert(
            ElementKind::ReportedProperty,
            ReportedProperty::new(name, data_type),
        )?;
        debug!("Added reported property '{}' to model '{}'", name, self.name);
        Ok(())
    }

    pub fn reported_property(&self, name: &str) -> Option<&ReportedProperty> {
        self.reported_properties.get(name)
    }

    pub fn reported_property_at(&self, index: usize) -> Option<&ReportedProperty> {
        self.reported_properties.get_index(index)
    }

    pub fn reported_property_count(&self) -> usize {
        self.reported_properties.len()
    }

    pub fn reported_properties(&self) -> &ElementList<ReportedProperty> {
        &self.reported_properties
    }

    // Desired properties

    pub fn add_desired_property(&mut self, property: DesiredProperty) -> Result<(), SchemaError> {
        self.rules.validate_typed(
            ElementKind::DesiredProperty,
            property.name(),
            property.data_type(),
        )?;
        let property = self
            .desired_properties
            .insert(ElementKind::DesiredProperty, property)?;
        debug!(
            "Added desired property '{}' to model '{}'",
            property.name(),
            self.name
        );
        Ok(())
    }

    pub fn desired_property(&self, name: &str) -> Option<&DesiredProperty> {
        self.desired_properties.get(name)
    }

    pub fn desired_property_at(&self, index: usize) -> Option<&DesiredProperty> {
        self.desired_properties.get_index(index)
    }

    pub fn desired_property_count(&self) -> usize {
        self.desired_properties.len()
    }

    pub fn desired_properties(&self) -> &ElementList<DesiredProperty> {
        &self.desired_properties
    }

    /// Classify a name by searching every collection of the model
    ///
    /// Model references are searched first, then properties, reported
    /// properties, desired properties, actions and methods.
    pub fn element(&self, name: &str) -> Option<ModelElement<'_>> {
        if let Some(reference) = self.model_reference(name) {
            return Some(ModelElement::ModelReference(reference));
        }
        if let Some(property) = self.property(name) {
            return Some(ModelElement::Property(property));
        }
        if let Some(property) = self.reported_property(name) {
            return Some(ModelElement::ReportedProperty(property));
        }
        if let Some(property) = self.desired_property(name) {
            return Some(ModelElement::DesiredProperty(property));
        }
        if let Some(action) = self.action(name) {
            return Some(ModelElement::Action(action));
        }
        self.method(name).map(ModelElement::Method)
    }

    // Device references

    /// Record one more device built from this model; returns the new count
    pub fn add_device_ref(&mut self) -> usize {
        self.device_count += 1;
        debug!(
            "Model '{}' device count is now {}",
            self.name, self.device_count
        );
        self.device_count
    }

    /// Release a device reference; returns the new count
    pub fn release_device_ref(&mut self) -> Result<usize, SchemaError> {
        if self.device_count == 0 {
            warn!("Device reference released on model '{}' with none held", self.name);
            return Err(SchemaError::DeviceCountZero(self.name.clone()));
        }

        self.device_count -= 1;
        debug!(
            "Model '{}' device count is now {}",
            self.name, self.device_count
        );
        Ok(self.device_count)
    }

    pub fn device_count(&self) -> usize {
        self.device_count
    }
}

impl Named for Model {
    fn name(&self) -> &str {
        &self.name
    }
}
