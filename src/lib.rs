//! anngate - annotation-driven configuration extraction with risk gating
//!
//! This library derives strongly-typed configuration for a feature area from
//! the string key/value metadata ("annotations") attached to a resource. A
//! declarative registry describes each field — key, validator, scope, risk
//! classification, documentation — and the extraction engine walks it to
//! produce one typed config per call. A risk gate rejects whole annotation
//! sets that reference fields above an administrator-configured maximum risk.
//!
//! # Core Concepts
//!
//! - **Annotation Set**: the raw string map attached to one resource, sourced
//!   by an external watcher
//! - **Field Registry**: the declarative table of field definitions for one
//!   feature group; adding a field is a data addition, not new control flow
//! - **Extraction**: per-field lookup, validation, and typed conversion with
//!   fallback-on-invalid — a malformed annotation degrades that one field to
//!   its default instead of failing the resource
//! - **Risk Gate**: policy screening that fails hard when an annotation's
//!   mere presence exceeds the allowed risk ceiling
//!
//! # Example Usage
//!
//! ```
//! use anngate::annotations::{AnnotationGroup, AnnotationSet, Risk, StaticPolicy};
//! use anngate::groups::TracingAnnotations;
//!
//! let set: AnnotationSet = [
//!     ("enable-tracing", "true"),
//!     ("tracing-operation-name", "checkout_flow"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let group = TracingAnnotations;
//! group.validate(&set, &StaticPolicy(Risk::High)).expect("within policy");
//!
//! let config = group.parse(&set);
//! assert!(config.enabled);
//! assert_eq!(config.operation_name, "checkout_flow");
//! ```
//!
//! # Project Structure
//!
//! - [`annotations`]: the generic framework — registries, validators,
//!   extraction engine, risk gate
//! - [`groups`]: feature groups built on the framework (tracing)
//! - [`util`]: logging setup for embedding binaries

// Public modules
pub mod annotations;
pub mod groups;
pub mod util;

// Re-export key types for convenient access
pub use annotations::{
    check_annotation_risk, AnnotationGroup, AnnotationSet, BoolField, Extractor, FieldDefinition,
    FieldRegistry, Outcome, PolicyViolation, RegistryError, Risk, Scope, SecurityPolicy,
    StaticPolicy, StringField, Validator,
};
pub use groups::{TracingAnnotations, TracingConfig};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
