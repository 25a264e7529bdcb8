//! Model-in-model references

use super::element::Named;
use super::schema::ModelId;
use super::twin::OnDesiredPropertyFn;

/// A named edge from a parent model to a child model
///
/// The child's storage lives at `offset` inside the parent's device
/// structure. Paths descend through references by name.
#[derive(Debug, Clone)]
pub struct ModelReference {
    name: String,
    model: ModelId,
    offset: usize,
    on_desired_property: Option<OnDesiredPropertyFn>,
}

impl ModelReference {
    pub(crate) fn new(
        name: &str,
        model: ModelId,
        offset: usize,
        on_desired_property: Option<OnDesiredPropertyFn>,
    ) -> Self {
        Self {
            name: name.to_string(),
            model,
            offset,
            on_desired_property,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The referenced (child) model
    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn on_desired_property(&self) -> Option<OnDesiredPropertyFn> {
        self.on_desired_property
    }
}

impl Named for ModelReference {
    fn name(&self) -> &str {
        &self.name
    }
}
