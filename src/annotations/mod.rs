//! Annotation-driven configuration extraction
//!
//! This module is the framework half of the crate: declarative field
//! registries, the three validator archetypes, the extraction engine that
//! turns one annotation set into typed field values, and the risk gate that
//! screens sets against an administrator-configured maximum risk.
//!
//! Feature groups (see [`crate::groups`]) plug into the framework through
//! the [`AnnotationGroup`] trait.

pub mod definition;
pub mod extract;
pub mod registry;
pub mod risk;
pub mod set;
pub mod validators;

pub use definition::{FieldDefinition, Risk, Scope, UnknownRisk};
pub use extract::{BoolField, Extractor, StringField};
pub use registry::{FieldRegistry, RegistryError};
pub use risk::{check_annotation_risk, PolicyViolation, SecurityPolicy, StaticPolicy};
pub use set::AnnotationSet;
pub use validators::{Outcome, Validator};

/// One feature area's annotation parser.
///
/// An implementation owns a registry and knows how to assemble its typed
/// config from extracted fields. `validate` and `documentation` come for
/// free from the registry: risk gating and doc export are uniform across
/// groups.
pub trait AnnotationGroup {
    /// The typed configuration this group produces. Equality is structural,
    /// including every `set` flag, so callers can detect configuration
    /// changes between reconciliations.
    type Config: PartialEq;

    /// The group's field registry
    fn registry(&self) -> &FieldRegistry;

    /// Extracts the group's configuration from an annotation set.
    ///
    /// Always returns a complete config: missing and invalid annotations
    /// resolve to defaults (invalid ones with a logged warning), never to a
    /// hard failure.
    fn parse(&self, set: &AnnotationSet) -> Self::Config;

    /// Screens the annotation set against the security policy's maximum
    /// risk. Must pass before `parse` output is applied.
    fn validate(
        &self,
        set: &AnnotationSet,
        policy: &dyn SecurityPolicy,
    ) -> Result<(), PolicyViolation> {
        check_annotation_risk(set, self.registry(), policy.max_annotation_risk())
    }

    /// The group's field definitions, for documentation generation.
    fn documentation(&self) -> &[FieldDefinition] {
        self.registry().fields()
    }
}
