//! Feature groups built on the annotation framework
//!
//! Each submodule declares one feature area's registry, its typed config,
//! and an [`crate::annotations::AnnotationGroup`] implementation.

pub mod tracing;

pub use self::tracing::{TracingAnnotations, TracingConfig};
