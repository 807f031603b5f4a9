//! Field registry: the authoritative field table for one feature group
//!
//! A registry is built once at process start from a list of field
//! definitions and is read-only afterwards. It backs three consumers: the
//! extraction engine (per-key lookup), the risk gate (risk scanning), and
//! documentation generation (enumeration of all definitions).

use std::collections::HashSet;
use thiserror::Error;

use super::definition::FieldDefinition;

/// Errors raised while constructing a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two field definitions share the same key
    #[error("duplicate field key '{key}' in group '{group}'")]
    DuplicateKey { group: String, key: String },
}

/// Ordered, read-only collection of field definitions for one feature group.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    group: &'static str,
    fields: Vec<FieldDefinition>,
}

impl FieldRegistry {
    /// Builds a registry, rejecting duplicate keys.
    pub fn new(
        group: &'static str,
        fields: Vec<FieldDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.key) {
                return Err(RegistryError::DuplicateKey {
                    group: group.to_string(),
                    key: field.key.to_string(),
                });
            }
        }
        Ok(Self { group, fields })
    }

    /// Name of the feature group this registry belongs to
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Looks up the definition for an annotation key
    pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Returns true if the registry declares the key
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All field definitions, in declaration order. This is the
    /// documentation-export surface: key, scope, risk, and docs are exposed
    /// verbatim for external tooling.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::definition::{Risk, Scope};
    use crate::annotations::validators::Validator;

    fn bool_field(key: &'static str) -> FieldDefinition {
        FieldDefinition {
            key,
            validator: Validator::Bool,
            scope: Scope::Location,
            risk: Risk::Low,
            documentation: "test field",
        }
    }

    #[test]
    fn test_new_registry() {
        let registry =
            FieldRegistry::new("test", vec![bool_field("enable-a"), bool_field("enable-b")])
                .unwrap();
        assert_eq!(registry.group(), "test");
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("enable-a"));
        assert!(!registry.contains("enable-c"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err =
            FieldRegistry::new("test", vec![bool_field("enable-a"), bool_field("enable-a")])
                .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { ref key, .. } if key == "enable-a"));
    }

    #[test]
    fn test_fields_preserve_declaration_order() {
        let registry =
            FieldRegistry::new("test", vec![bool_field("b"), bool_field("a")]).unwrap();
        let keys: Vec<&str> = registry.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = FieldRegistry::new("empty", vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.get("anything").map(|f| f.key), None);
    }
}
