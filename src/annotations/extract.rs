//! Extraction engine: from an annotation set to typed field values
//!
//! The engine walks a registry's keys against one annotation set. Each field
//! is resolved independently: missing keys resolve silently to the type's
//! default, invalid values log a warning and then resolve exactly like
//! missing ones. A malformed annotation never aborts extraction for the
//! whole resource — degrading to "feature disabled" is strictly safer than
//! refusing to reconcile the resource at all.

use tracing::warn;

use super::registry::FieldRegistry;
use super::set::AnnotationSet;
use super::validators::Outcome;

/// A boolean field plus the flag recording whether a syntactically valid
/// value was actually supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolField {
    pub value: bool,
    pub set: bool,
}

/// A string field plus its `set` flag. Absent and invalid both yield an
/// empty value with `set` false; the difference is only visible as a warning
/// in the diagnostics sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringField {
    pub value: String,
    pub set: bool,
}

/// Borrowing view that resolves registry fields against one annotation set.
///
/// Cheap to construct per extraction call; holds no state beyond the two
/// borrows, so concurrent extractions over a shared registry need no
/// synchronization.
pub struct Extractor<'a> {
    set: &'a AnnotationSet,
    registry: &'a FieldRegistry,
}

impl<'a> Extractor<'a> {
    pub fn new(set: &'a AnnotationSet, registry: &'a FieldRegistry) -> Self {
        Self { set, registry }
    }

    /// Resolves a key to its validated, normalized value.
    ///
    /// Returns `None` both for missing keys (silently) and for values the
    /// field's validator rejects (with a warning). An empty string present
    /// in the set is handed to the validator like any other value.
    fn lookup(&self, key: &str) -> Option<String> {
        let Some(field) = self.registry.get(key) else {
            debug_assert!(
                false,
                "key '{}' is not declared in group '{}'",
                key,
                self.registry.group()
            );
            return None;
        };

        let raw = self.set.get(key)?;

        match field.validator.check(raw) {
            Outcome::Accepted(normalized) => Some(normalized),
            Outcome::Rejected => {
                warn!(
                    group = self.registry.group(),
                    annotation = key,
                    "annotation contains an invalid value, falling back to the default"
                );
                None
            }
        }
    }

    /// Extracts a boolean field declared with the boolean validator.
    pub fn bool_field(&self, key: &str) -> BoolField {
        match self.lookup(key) {
            Some(normalized) => BoolField {
                value: normalized == "true",
                set: true,
            },
            None => BoolField::default(),
        }
    }

    /// Extracts a string field (regex- or options-validated).
    pub fn string_field(&self, key: &str) -> StringField {
        match self.lookup(key) {
            Some(normalized) => StringField {
                value: normalized,
                set: true,
            },
            None => StringField::default(),
        }
    }
}
