//! Path resolution
//!
//! Paths name a member reachable from a model, e.g. `"engine/sensor/rpm"`.
//! Every segment but the last must name a model reference; the last names
//! either a model reference (the path then denotes that nested model) or a
//! leaf of the requested kind. A single leading `/` is ignored; empty
//! segments never match.

use tracing::debug;

use crate::error::ElementKind;
use crate::models::{Model, ModelId, Schema};
use crate::validation::naming::PATH_DELIMITER;

/// Kind of leaf a path is expected to end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathLeaf {
    Property,
    ReportedProperty,
    DesiredProperty,
}

impl PathLeaf {
    pub fn kind(&self) -> ElementKind {
        match self {
            PathLeaf::Property => ElementKind::Property,
            PathLeaf::ReportedProperty => ElementKind::ReportedProperty,
            PathLeaf::DesiredProperty => ElementKind::DesiredProperty,
        }
    }
}

/// What a path resolved to
///
/// `offset` accumulates the offsets of every model reference walked through,
/// plus the desired property's own offset for desired leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTarget {
    /// The path ends at a nested model
    Model { model: ModelId, offset: usize },
    /// The path ends at a leaf of the requested kind owned by `model`
    Leaf {
        model: ModelId,
        leaf: PathLeaf,
        name: String,
        offset: usize,
    },
}

impl PathTarget {
    /// Model that owns the target (the nested model itself for model targets)
    pub fn model(&self) -> ModelId {
        match self {
            PathTarget::Model { model, .. } | PathTarget::Leaf { model, .. } => *model,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            PathTarget::Model { offset, .. } | PathTarget::Leaf { offset, .. } => *offset,
        }
    }
}

/// Resolve `path` starting at `model` inside `schema`
pub fn resolve(schema: &Schema, model: ModelId, path: &str, leaf: PathLeaf) -> Option<PathTarget> {
    let mut current = schema.model_by_id(model)?;
    let trimmed = path.strip_prefix(PATH_DELIMITER).unwrap_or(path);
    if trimmed.is_empty() {
        debug!("Empty path '{}' on model '{}'", path, current.name());
        return None;
    }

    let mut offset = 0;
    let mut segments = trimmed.split(PATH_DELIMITER).peekable();
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            debug!("Path '{}' has an empty segment", path);
            return None;
        }
        let last = segments.peek().is_none();

        if let Some(reference) = current.model_reference(segment) {
            offset += reference.offset();
            current = schema.model_by_id(reference.model())?;
            if last {
                return Some(PathTarget::Model {
                    model: current.id(),
                    offset,
                });
            }
            continue;
        }

        if !last {
            debug!(
                "Path '{}' segment '{}' is not a model reference of '{}'",
                path,
                segment,
                current.name()
            );
            return None;
        }
        return resolve_leaf(current, segment, leaf, offset);
    }

    None
}

fn resolve_leaf(model: &Model, name: &str, leaf: PathLeaf, offset: usize) -> Option<PathTarget> {
    let offset = match leaf {
        PathLeaf::Property => model.property(name).map(|_| offset),
        PathLeaf::ReportedProperty => model.reported_property(name).map(|_| offset),
        PathLeaf::DesiredProperty => model
            .desired_property(name)
            .map(|property| offset + property.offset()),
    }?;

    Some(PathTarget::Leaf {
        model: model.id(),
        leaf,
        name: name.to_string(),
        offset,
    })
}
