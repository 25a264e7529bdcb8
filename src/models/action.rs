//! Action and method models for the SDK
//!
//! Actions and methods are both named commands carrying an ordered list of
//! typed arguments. Actions are the classic cloud-to-device commands; methods
//! are the direct-method flavour that returns a result to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::element::{ElementList, Named};
use crate::error::{ElementKind, SchemaError};
use crate::validation::NamingRules;

/// A named, typed argument of an action or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

impl Named for Argument {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered arguments of an action or method
pub type ArgumentList = ElementList<Argument>;

/// A command a device model accepts
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    name: String,
    arguments: ArgumentList,
    rules: NamingRules,
}

impl Action {
    pub(crate) fn new(name: &str, rules: NamingRules) -> Self {
        Self {
            name: name.to_string(),
            arguments: ArgumentList::new(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an argument; argument names are unique within the action
    pub fn add_argument(&mut self, name: &str, data_type: &str) -> Result<(), SchemaError> {
        add_argument(&mut self.arguments, &self.rules, name, data_type)?;
        debug!("Added argument '{}' to action '{}'", name, self.name);
        Ok(())
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    pub fn argument_at(&self, index: usize) -> Option<&Argument> {
        self.arguments.get_index(index)
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }
}

impl Named for Action {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A direct method a device model exposes
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    arguments: ArgumentList,
    rules: NamingRules,
}

impl Method {
    pub(crate) fn new(name: &str, rules: NamingRules) -> Self {
        Self {
            name: name.to_string(),
            arguments: ArgumentList::new(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an argument; argument names are unique within the method
    pub fn add_argument(&mut self, name: &str, data_type: &str) -> Result<(), SchemaError> {
        add_argument(&mut self.arguments, &self.rules, name, data_type)?;
        debug!("Added argument '{}' to method '{}'", name, self.name);
        Ok(())
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    pub fn argument_at(&self, index: usize) -> Option<&Argument> {
        self.arguments.get_index(index)
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }
}

impl Named for Method {
    fn name(&self) -> &str {
        &self.name
    }
}

fn add_argument(
    arguments: &mut ArgumentList,
    rules: &NamingRules,
    name: &str,
    data_type: &str,
) -> Result<(), SchemaError> {
    rules.validate_typed(ElementKind::Argument, name, data_type)?;
    arguments.insert(ElementKind::Argument, Argument::new(name, data_type))?;
    Ok(())
}
