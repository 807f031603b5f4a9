//! Risk gate: policy screening of annotation sets
//!
//! Before a feature group's configuration is applied, every annotation in
//! the set that the group's registry knows about is checked against the
//! administrator-configured maximum risk. Presence alone is what matters: a
//! key at too high a risk is a violation even if its value would never pass
//! validation, because presence already signals an attempt to opt into a
//! sensitive feature.

use thiserror::Error;

use super::definition::Risk;
use super::registry::FieldRegistry;
use super::set::AnnotationSet;

/// External provider of the current maximum allowed annotation risk.
///
/// Typically backed by cluster-wide admin configuration. The risk gate reads
/// it once per validation call and never caches the answer.
pub trait SecurityPolicy {
    fn max_annotation_risk(&self) -> Risk;
}

/// A fixed-ceiling policy, for embeddings without a dynamic policy source.
#[derive(Debug, Clone, Copy)]
pub struct StaticPolicy(pub Risk);

impl SecurityPolicy for StaticPolicy {
    fn max_annotation_risk(&self) -> Risk {
        self.0
    }
}

/// Hard failure: the annotation set references at least one field whose
/// declared risk exceeds the configured maximum. The caller must not apply
/// this configuration; this is distinct from falling back to defaults.
#[derive(Debug, Error)]
#[error(
    "annotation group '{group}' rejected: {keys:?} exceed the maximum allowed risk level '{max_risk}'"
)]
pub struct PolicyViolation {
    /// Feature group whose registry flagged the violation
    pub group: String,
    /// Every offending key, sorted for stable reporting
    pub keys: Vec<String>,
    /// The maximum that was in force
    pub max_risk: Risk,
}

/// Screens an annotation set against a registry and a maximum risk.
///
/// Keys absent from the registry belong to other groups and are skipped.
/// Succeeds on the empty set.
pub fn check_annotation_risk(
    set: &AnnotationSet,
    registry: &FieldRegistry,
    max_risk: Risk,
) -> Result<(), PolicyViolation> {
    let mut offending: Vec<String> = set
        .iter()
        .filter_map(|(key, _)| registry.get(key))
        .filter(|field| field.risk > max_risk)
        .map(|field| field.key.to_string())
        .collect();

    if offending.is_empty() {
        return Ok(());
    }

    offending.sort_unstable();
    Err(PolicyViolation {
        group: registry.group().to_string(),
        keys: offending,
        max_risk,
    })
}
