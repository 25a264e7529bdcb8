//! Ordered, name-unique element collections
//!
//! Every container in a schema (model properties, action arguments, struct
//! properties, ...) keeps its members in insertion order and rejects a second
//! member with the same name. Lookups are linear, which is what the small
//! per-model collections call for.

use tracing::warn;

use crate::error::{ElementKind, SchemaError};

/// Anything that is identified by a name within its container
pub trait Named {
    fn name(&self) -> &str;
}

/// Ordered collection of uniquely named elements
#[derive(Debug, Clone, PartialEq)]
pub struct ElementList<T> {
    items: Vec<T>,
}

impl<T> Default for ElementList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Named> ElementList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, failing when the name is already taken
    pub(crate) fn insert(&mut self, kind: ElementKind, item: T) -> Result<&mut T, SchemaError> {
        if self.contains(item.name()) {
            warn!("Rejected duplicate {} '{}'", kind, item.name());
            return Err(SchemaError::duplicate(kind, item.name()));
        }

        let index = self.items.len();
        self.items.push(item);
        Ok(&mut self.items[index])
    }

    /// Get an element by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    /// Get an element by insertion index
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Check if an element with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a ElementList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
