//! Field definitions for annotation registries
//!
//! This module defines the building blocks of a declarative annotation
//! registry: the risk classification assigned to each annotation, the scope
//! it may legally apply to, and the `FieldDefinition` record tying a key to
//! its validator, scope, risk, and documentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::validators::Validator;

/// Coarse sensitivity classification of an annotation.
///
/// Risk levels are totally ordered (`Low < Medium < High < Critical`) so the
/// risk gate can compare a field's declared risk against the configured
/// maximum with a plain `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Risk::Low => "low",
            Risk::Medium => "medium",
            Risk::High => "high",
            Risk::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when parsing an unrecognized risk level string
#[derive(Debug, Error)]
#[error("unknown risk level: {0}. Valid options: low, medium, high, critical")]
pub struct UnknownRisk(String);

impl FromStr for Risk {
    type Err = UnknownRisk;

    /// Parses a risk level from its administrator-facing string form,
    /// case-insensitively. This is how an external security configuration
    /// expresses the maximum allowed risk.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Risk::Low),
            "medium" => Ok(Risk::Medium),
            "high" => Ok(Risk::High),
            "critical" => Ok(Risk::Critical),
            _ => Err(UnknownRisk(s.to_string())),
        }
    }
}

/// Where an annotation may legally apply.
///
/// Informational for this crate: extraction and risk gating treat all scopes
/// alike, but callers consume the scope when deciding which resource level an
/// annotation is honored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applies to an individual location/route within a resource
    Location,
    /// Applies to the whole resource
    Resource,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Location => "location",
            Scope::Resource => "resource",
        };
        write!(f, "{}", name)
    }
}

/// Declarative description of one configuration field.
///
/// A field definition ties an annotation key to its validator, scope, risk
/// classification, and free-text documentation. Definitions are immutable
/// data: adding a field to a feature group is a data addition to its
/// registry, not new control flow.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Annotation key, unique within its registry (the registry's group name
    /// conceptually namespaces it)
    pub key: &'static str,

    /// Validation strategy applied to the raw string value
    pub validator: Validator,

    /// Where the annotation may legally apply
    pub scope: Scope,

    /// Declared sensitivity, compared against the policy maximum
    pub risk: Risk,

    /// Free-text documentation, exported verbatim for doc generation
    pub documentation: &'static str,
}
