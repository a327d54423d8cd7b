//! Typed setter behavior: kind checks, encodings, and the missing sentinel.

use arff_core::{
    ArffError, Attribute, AttributeKey, InstanceBuilder, NominalLabel, Schema, ValueKind,
};
use proptest::prelude::{ProptestConfig, prop_assert, prop_assert_eq, proptest};

#[derive(Clone, Copy)]
enum Vital {
    Age,
    Smoker,
    City,
    Severity,
}

impl AttributeKey for Vital {
    const COUNT: usize = 4;
    fn ordinal(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy)]
enum Risk {
    Low,
    Medium,
    High,
}

impl NominalLabel for Risk {
    fn ordinal(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy)]
enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl NominalLabel for Severity {
    fn ordinal(self) -> usize {
        self as usize
    }
}

fn vitals_schema() -> Schema {
    Schema::new(
        vec![
            Attribute::numeric("AGE"),
            Attribute::boolean("SMOKER"),
            Attribute::text("CITY"),
            Attribute::nominal("SEVERITY", ["mild", "moderate", "severe"]),
        ],
        Attribute::nominal("RISK", ["low", "medium", "high"]),
    )
}

fn builder(schema: &Schema) -> InstanceBuilder<'_, Vital, Risk> {
    InstanceBuilder::for_nominal_class(schema).expect("builder")
}

#[test]
fn numeric_setters_store_the_value_as_f64() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder.set_f64(Vital::Age, Some(47.5)).expect("set f64");
    assert_eq!(builder.instance().value(0), Some(47.5));

    builder.set_f32(Vital::Age, Some(21.5f32)).expect("set f32");
    assert_eq!(builder.instance().value(0), Some(21.5));

    builder.set_i64(Vital::Age, Some(63)).expect("set i64");
    assert_eq!(builder.instance().value(0), Some(63.0));
}

#[test]
fn boolean_true_encodes_as_zero_false_as_one() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder.set_bool(Vital::Smoker, Some(true)).expect("set bool");
    assert_eq!(builder.instance().value(1), Some(0.0));
    builder.set_bool(Vital::Smoker, Some(false)).expect("set bool");
    assert_eq!(builder.instance().value(1), Some(1.0));
}

#[test]
fn text_values_store_the_interned_index() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder
        .set_text(Vital::City, Some("Utrecht"))
        .expect("set text");
    assert_eq!(builder.instance().value(2), Some(0.0));
    builder
        .set_text(Vital::City, Some("Leiden"))
        .expect("set text");
    assert_eq!(builder.instance().value(2), Some(1.0));
    builder
        .set_text(Vital::City, Some("Utrecht"))
        .expect("set text");
    assert_eq!(builder.instance().value(2), Some(0.0));
}

#[test]
fn nominal_labels_store_their_ordinal() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder
        .set_nominal(Vital::Severity, Some(Severity::Severe))
        .expect("set nominal");
    assert_eq!(builder.instance().value(3), Some(2.0));
}

#[test]
fn none_overwrites_a_present_value_with_the_missing_sentinel() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder.set_f64(Vital::Age, Some(47.0)).expect("set");
    builder.set_f64(Vital::Age, None).expect("clear");
    assert!(builder.instance().is_missing(0));
}

#[test]
fn kind_mismatch_fails_without_mutating_the_instance() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);

    let error = builder
        .set_bool(Vital::Age, Some(true))
        .err()
        .expect("boolean setter on a numeric attribute");
    match error {
        ArffError::KindMismatch {
            attribute,
            expected,
            supplied,
        } => {
            assert_eq!(attribute, "AGE");
            assert_eq!(expected, ValueKind::Numeric);
            assert_eq!(supplied, ValueKind::Boolean);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(builder.instance().is_missing(0));

    assert!(builder.set_f64(Vital::Smoker, Some(1.0)).is_err());
    assert!(builder.set_text(Vital::Age, Some("x")).is_err());
    assert!(builder.set_nominal(Vital::City, Some(Severity::Mild)).is_err());
    assert!(builder.instance().first_missing_attribute() == Some(0));
}

#[test]
fn nominal_ordinal_out_of_range_is_rejected() {
    #[derive(Clone, Copy)]
    struct Stray;
    impl NominalLabel for Stray {
        fn ordinal(self) -> usize {
            5
        }
    }

    let schema = vitals_schema();
    let mut builder = builder(&schema);
    let error = builder
        .set_nominal(Vital::Severity, Some(Stray))
        .err()
        .expect("ordinal beyond declared values");
    assert!(matches!(
        error,
        ArffError::NominalOutOfRange {
            ordinal: 5,
            cardinality: 3,
            ..
        }
    ));
    assert!(builder.instance().is_missing(3));
}

#[test]
fn set_weight_stores_the_multiplier_unvalidated() {
    let schema = vitals_schema();
    let mut builder = builder(&schema);
    builder.set_weight(0.25);
    assert_eq!(builder.instance().weight(), 0.25);
    builder.set_weight(-3.0);
    assert_eq!(builder.instance().weight(), -3.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn finite_numeric_values_pass_through_unchanged(value in -1.0e9f64..1.0e9f64) {
        let schema = vitals_schema();
        let mut builder = builder(&schema);
        builder.set_f64(Vital::Age, Some(value)).expect("set");
        prop_assert_eq!(builder.instance().value(0), Some(value));
        // Other slots stay untouched.
        prop_assert!(builder.instance().is_missing(1));
        prop_assert!(builder.instance().is_missing(2));
        prop_assert!(builder.instance().is_missing(3));
    }

    #[test]
    fn integer_values_encode_as_f64(value in -1_000_000i64..1_000_000i64) {
        let schema = vitals_schema();
        let mut builder = builder(&schema);
        builder.set_i64(Vital::Age, Some(value)).expect("set");
        prop_assert_eq!(builder.instance().value(0), Some(value as f64));
    }

    #[test]
    fn mismatched_setters_never_mutate(value in -1.0e9f64..1.0e9f64) {
        let schema = vitals_schema();
        let mut builder = builder(&schema);
        prop_assert!(builder.set_f64(Vital::Smoker, Some(value)).is_err());
        prop_assert!(builder.instance().is_missing(1));
    }
}
