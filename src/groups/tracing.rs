//! Tracing feature group
//!
//! Annotations controlling distributed tracing for a location: whether the
//! collector is enabled, whether incoming spans are trusted as parents, the
//! span operation name, and the propagation format.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::annotations::{
    AnnotationGroup, AnnotationSet, Extractor, FieldDefinition, FieldRegistry, Risk, Scope,
    Validator,
};

pub const ENABLE_TRACING: &str = "enable-tracing";
pub const TRUST_INCOMING_SPAN: &str = "tracing-trust-incoming-span";
pub const OPERATION_NAME: &str = "tracing-operation-name";
pub const PROPAGATION_TYPE: &str = "tracing-propagation-type";

static REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(|| {
    let operation_name_pattern =
        regex::Regex::new(r"^[A-Za-z0-9_\-]*$").expect("operation name pattern is valid");

    FieldRegistry::new(
        "tracing",
        vec![
            FieldDefinition {
                key: ENABLE_TRACING,
                validator: Validator::Bool,
                scope: Scope::Location,
                risk: Risk::Low,
                documentation: "Enables the tracing collector for this location. The collector \
                                itself must already be configured by the administrator.",
            },
            FieldDefinition {
                key: TRUST_INCOMING_SPAN,
                validator: Validator::Bool,
                scope: Scope::Location,
                risk: Risk::Low,
                documentation: "Enables or disables using spans from incoming requests as \
                                parents for created ones.",
            },
            FieldDefinition {
                key: OPERATION_NAME,
                validator: Validator::Regex {
                    pattern: operation_name_pattern,
                    allow_empty: true,
                },
                scope: Scope::Location,
                risk: Risk::Medium,
                documentation: "Operation name added to spans created for this location. \
                                Alphanumerics, underscore, and hyphen only.",
            },
            FieldDefinition {
                key: PROPAGATION_TYPE,
                validator: Validator::Options {
                    allowed: &["w3c", "b3"],
                    case_sensitive: false,
                    allow_empty: true,
                },
                scope: Scope::Location,
                risk: Risk::Low,
                documentation: "Propagation format used for spans created for this location.",
            },
        ],
    )
    .expect("tracing registry keys are unique")
});

/// Extracted tracing configuration for one location.
///
/// Equality is structural across all fields including the `set` flags, so
/// two configs compare equal only when their effective behavior is
/// identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TracingConfig {
    pub enabled: bool,
    pub enabled_set: bool,
    pub trust_incoming_span: bool,
    pub trust_set: bool,
    pub operation_name: String,
    pub propagation_type: String,
}

/// Parser for the tracing annotation group.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnotations;

impl AnnotationGroup for TracingAnnotations {
    type Config = TracingConfig;

    fn registry(&self) -> &FieldRegistry {
        &REGISTRY
    }

    fn parse(&self, set: &AnnotationSet) -> TracingConfig {
        let fields = Extractor::new(set, &REGISTRY);

        let enabled = fields.bool_field(ENABLE_TRACING);
        let trust = fields.bool_field(TRUST_INCOMING_SPAN);

        TracingConfig {
            enabled: enabled.value,
            enabled_set: enabled.set,
            trust_incoming_span: trust.value,
            trust_set: trust.set,
            operation_name: fields.string_field(OPERATION_NAME).value,
            propagation_type: fields.string_field(PROPAGATION_TYPE).value,
        }
    }
}
