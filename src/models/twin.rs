//! Device twin properties
//!
//! Reported properties are values a device publishes about itself. Desired
//! properties flow the other way: the service writes a JSON value, and the
//! registered conversion callback decodes it into the device's own storage.
//! The storage is type-erased (`&mut dyn Any`); each callback downcasts to
//! the concrete type it was written for.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;

use super::element::Named;
use crate::error::ConversionError;

/// Decodes an incoming JSON value into the destination storage
pub type FromAgentValueFn = fn(&Value, &mut dyn Any) -> Result<(), ConversionError>;

/// Puts the destination storage into its initial state
pub type InitializeFn = fn(&mut dyn Any);

/// Releases whatever the destination storage holds
pub type DeinitializeFn = fn(&mut dyn Any);

/// Notification raised after a desired value was applied
pub type OnDesiredPropertyFn = fn(&mut dyn Any);

/// A property the device reports to the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

impl ReportedProperty {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

impl Named for ReportedProperty {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Marshalling callbacks every desired property carries
#[derive(Debug, Clone, Copy)]
pub struct DesiredPropertyCallbacks {
    pub from_agent_value: FromAgentValueFn,
    pub initialize: InitializeFn,
    pub deinitialize: DeinitializeFn,
}

/// A property the service sets on the device
///
/// `offset` locates the property's storage inside the owning model's
/// device structure.
#[derive(Debug, Clone)]
pub struct DesiredProperty {
    name: String,
    data_type: String,
    offset: usize,
    callbacks: DesiredPropertyCallbacks,
    on_desired_property: Option<OnDesiredPropertyFn>,
}

impl DesiredProperty {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        offset: usize,
        callbacks: DesiredPropertyCallbacks,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            offset,
            callbacks,
            on_desired_property: None,
        }
    }

    /// Attach a notification callback
    pub fn with_on_desired_property(mut self, callback: OnDesiredPropertyFn) -> Self {
        self.on_desired_property = Some(callback);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn callbacks(&self) -> &DesiredPropertyCallbacks {
        &self.callbacks
    }

    pub fn from_agent_value(&self) -> FromAgentValueFn {
        self.callbacks.from_agent_value
    }

    pub fn initialize_fn(&self) -> InitializeFn {
        self.callbacks.initialize
    }

    pub fn deinitialize_fn(&self) -> DeinitializeFn {
        self.callbacks.deinitialize
    }

    pub fn on_desired_property(&self) -> Option<OnDesiredPropertyFn> {
        self.on_desired_property
    }

    /// Convert an incoming value into `dest`
    pub fn convert(&self, value: &Value, dest: &mut dyn Any) -> Result<(), ConversionError> {
        (self.callbacks.from_agent_value)(value, dest)
    }

    pub fn initialize(&self, dest: &mut dyn Any) {
        (self.callbacks.initialize)(dest)
    }

    pub fn deinitialize(&self, dest: &mut dyn Any) {
        (self.callbacks.deinitialize)(dest)
    }

    /// Run the notification callback; returns false when none is attached
    pub fn notify(&self, dest: &mut dyn Any) -> bool {
        match self.on_desired_property {
            Some(callback) => {
                callback(dest);
                true
            }
            None => false,
        }
    }
}

impl Named for DesiredProperty {
    fn name(&self) -> &str {
        &self.name
    }
}
