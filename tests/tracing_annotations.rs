//! End-to-end tests for the tracing annotation group: risk gating, extraction
//! with fallback, and config change detection.

use anngate::annotations::{AnnotationGroup, AnnotationSet, Risk, StaticPolicy};
use anngate::groups::{TracingAnnotations, TracingConfig};
use yare::parameterized;

fn checkout_set() -> AnnotationSet {
    [
        ("enable-tracing", "true"),
        ("tracing-operation-name", "checkout_flow"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_validate_then_parse_within_policy() {
    let group = TracingAnnotations;
    let set = checkout_set();

    group
        .validate(&set, &StaticPolicy(Risk::High))
        .expect("medium-risk operation name is within a high ceiling");

    let config = group.parse(&set);
    assert!(config.enabled);
    assert!(config.enabled_set);
    assert_eq!(config.operation_name, "checkout_flow");
}

#[test]
fn test_invalid_operation_name_degrades_without_hard_error() {
    let set: AnnotationSet = [
        ("enable-tracing", "true"),
        ("tracing-operation-name", "bad name!"),
    ]
    .into_iter()
    .collect();

    let config = TracingAnnotations.parse(&set);
    assert!(config.enabled);
    assert_eq!(config.operation_name, "");
}

#[test]
fn test_low_ceiling_rejects_medium_risk_key() {
    let violation = TracingAnnotations
        .validate(&checkout_set(), &StaticPolicy(Risk::Low))
        .unwrap_err();
    assert_eq!(violation.keys, vec!["tracing-operation-name".to_string()]);
    assert_eq!(violation.max_risk, Risk::Low);
}

#[test]
fn test_empty_set_validates_and_parses_to_defaults() {
    let group = TracingAnnotations;
    let empty = AnnotationSet::new();

    assert!(group.validate(&empty, &StaticPolicy(Risk::Low)).is_ok());
    assert_eq!(group.parse(&empty), TracingConfig::default());
}

#[test]
fn test_unrelated_keys_are_ignored() {
    let set: AnnotationSet = [
        ("enable-tracing", "true"),
        ("some-other-group-annotation", "value"),
    ]
    .into_iter()
    .collect();

    let group = TracingAnnotations;
    assert!(group.validate(&set, &StaticPolicy(Risk::Low)).is_ok());

    let config = group.parse(&set);
    assert!(config.enabled);
    assert_eq!(config.operation_name, "");
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let a = TracingAnnotations.parse(&checkout_set());
    let b = TracingAnnotations.parse(&checkout_set());

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[parameterized(
    enabled = { |c: &mut TracingConfig| c.enabled = true },
    enabled_set = { |c: &mut TracingConfig| c.enabled_set = true },
    trust = { |c: &mut TracingConfig| c.trust_incoming_span = true },
    trust_set = { |c: &mut TracingConfig| c.trust_set = true },
    operation_name = { |c: &mut TracingConfig| c.operation_name = "other".to_string() },
    propagation_type = { |c: &mut TracingConfig| c.propagation_type = "b3".to_string() },
)]
fn test_equality_detects_single_field_change(mutate: fn(&mut TracingConfig)) {
    let base = TracingConfig::default();
    let mut changed = base.clone();
    mutate(&mut changed);
    assert_ne!(base, changed);
}

#[test]
fn test_reconciliation_change_detection() {
    let group = TracingAnnotations;
    let before = group.parse(&checkout_set());

    let mut set = checkout_set();
    set.insert("tracing-operation-name", "refund_flow");
    let after = group.parse(&set);

    assert_ne!(before, after);
}

#[test]
fn test_invalid_value_is_indistinguishable_from_absent_in_config() {
    let group = TracingAnnotations;

    let invalid: AnnotationSet = [("tracing-operation-name", "bad name!")]
        .into_iter()
        .collect();
    let absent = AnnotationSet::new();

    assert_eq!(group.parse(&invalid), group.parse(&absent));
}

#[test]
fn test_documentation_export() {
    let group = TracingAnnotations;
    let docs = group.documentation();

    assert_eq!(docs.len(), 4);
    for field in docs {
        assert!(!field.documentation.is_empty(), "field {} undocumented", field.key);
    }
}

#[test]
fn test_policy_is_read_per_validation_call() {
    // Same set, different ceilings: the gate reflects whatever the policy
    // currently reports.
    let group = TracingAnnotations;
    let set = checkout_set();

    assert!(group.validate(&set, &StaticPolicy(Risk::Medium)).is_ok());
    assert!(group.validate(&set, &StaticPolicy(Risk::Low)).is_err());
}
