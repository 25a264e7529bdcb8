//! Name validation
//!
//! Every named element in a schema goes through [`NamingRules`] before it is
//! inserted, so lookups and path resolution never see an empty name or a
//! name containing the path delimiter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ElementKind, SchemaError};

/// Path delimiter used by model/property paths
pub const PATH_DELIMITER: char = '/';

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Rules applied to element names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingRules {
    /// Maximum name length in bytes (0 = unlimited)
    pub max_len: usize,
    /// Require names to be C-style identifiers
    pub strict_identifiers: bool,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            max_len: 0,
            strict_identifiers: false,
        }
    }
}

impl NamingRules {
    /// Validate the name of an element of the given kind
    pub fn validate_name(&self, kind: ElementKind, name: &str) -> Result<(), SchemaError> {
        if name.is_empty() {
            return Err(SchemaError::InvalidArgument(format!("{kind} name is empty")));
        }
        if name.contains(PATH_DELIMITER) {
            return Err(SchemaError::InvalidArgument(format!(
                "{kind} name '{name}' contains the path delimiter '{PATH_DELIMITER}'"
            )));
        }
        if self.max_len > 0 && name.len() > self.max_len {
            return Err(SchemaError::InvalidArgument(format!(
                "{kind} name '{name}' exceeds max length {}",
                self.max_len
            )));
        }
        if self.strict_identifiers && !IDENTIFIER_REGEX.is_match(name) {
            return Err(SchemaError::InvalidArgument(format!(
                "{kind} name '{name}' is not a valid identifier"
            )));
        }

        Ok(())
    }

    /// Validate a name together with its type string
    pub fn validate_typed(
        &self,
        kind: ElementKind,
        name: &str,
        data_type: &str,
    ) -> Result<(), SchemaError> {
        self.validate_name(kind, name)?;
        if data_type.is_empty() {
            return Err(SchemaError::InvalidArgument(format!(
                "{kind} '{name}' has an empty type"
            )));
        }

        Ok(())
    }
}

/// Validate a schema namespace
pub fn validate_namespace(namespace: &str) -> Result<(), SchemaError> {
    if namespace.is_empty() {
        return Err(SchemaError::InvalidArgument(
            "schema namespace is empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_delimited_names() {
        let rules = NamingRules::default();
        assert!(rules.validate_name(ElementKind::Property, "").is_err());
        assert!(rules.validate_name(ElementKind::Property, "a/b").is_err());
        assert!(rules.validate_name(ElementKind::Property, "/").is_err());
    }

    #[test]
    fn test_accepts_free_form_names_by_default() {
        let rules = NamingRules::default();
        assert!(rules.validate_name(ElementKind::Model, "Some Model-1").is_ok());
    }

    #[test]
    fn test_enforces_max_len() {
        let rules = NamingRules {
            max_len: 4,
            strict_identifiers: false,
        };
        assert!(rules.validate_name(ElementKind::Action, "abcd").is_ok());
        assert!(rules.validate_name(ElementKind::Action, "abcde").is_err());
    }

    #[test]
    fn test_strict_identifiers() {
        let rules = NamingRules {
            max_len: 0,
            strict_identifiers: true,
        };
        assert!(rules.validate_name(ElementKind::Property, "_temp1").is_ok());
        assert!(rules.validate_name(ElementKind::Property, "1temp").is_err());
        assert!(rules.validate_name(ElementKind::Property, "temp-c").is_err());
    }

    #[test]
    fn test_typed_elements_need_a_type() {
        let rules = NamingRules::default();
        assert!(rules.validate_typed(ElementKind::Argument, "a", "int").is_ok());
        assert!(rules.validate_typed(ElementKind::Argument, "a", "").is_err());
    }

    #[test]
    fn test_namespace_must_not_be_empty() {
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("Contoso").is_ok());
    }
}
