//! Property-based tests for fieldcheck-validator.

use fieldcheck_validator::prelude::*;
use proptest::prelude::*;

const FIELDS_AND_EXTRAS: [&str; 7] = [
    "type",
    "location_id",
    "category_id",
    "c_keyword",
    "b_keyword",
    "extra",
    "note",
];

fn keep_or_strip() -> impl Strategy<Value = UnknownFields> {
    prop_oneof![Just(UnknownFields::Allow), Just(UnknownFields::Strip)]
}

fn schema() -> Schema {
    schema_with(UnknownFields::Allow)
}

fn schema_with(unknown: UnknownFields) -> Schema {
    Schema::builder()
        .field(FieldSpec::required("type").rule(one_of(["0", "1", "2"])))
        .field(FieldSpec::optional("location_id").rule(digits()).rule(max_length(2)))
        .field(FieldSpec::required("category_id").rule(min_length(1)))
        .field(FieldSpec::optional("c_keyword"))
        .field(FieldSpec::optional("b_keyword").trim(false))
        .unknown_fields(unknown)
        .build()
        .unwrap()
}

fn any_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(
        (
            prop::sample::select(FIELDS_AND_EXTRAS.to_vec()),
            "[ 0-9a-z]{0,4}",
        ),
        0..8,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

/// Records whose required fields are filled, so most of them pass.
fn passing_record() -> impl Strategy<Value = Record> {
    (any_record(), prop::sample::select(vec!["0", " 1", "2 "]), "[a-z]{1,3}").prop_map(
        |(mut record, kind, category)| {
            record.insert("type", kind);
            record.insert("category_id", category);
            record
        },
    )
}

// ============================================================================
// IDEMPOTENCE: a normalized record validates to itself
// ============================================================================

proptest! {
    #[test]
    fn normalized_records_are_fixed_points(record in passing_record(), unknown in keep_or_strip()) {
        let validator = Validator::new(schema_with(unknown));
        if let ValidationOutcome::Valid(first) = validator.validate(&record) {
            let second = validator.validate(&first);
            prop_assert_eq!(second, ValidationOutcome::Valid(first));
        }
    }

    #[test]
    fn strip_leaves_only_declared_fields(record in passing_record()) {
        let validator = Validator::new(schema_with(UnknownFields::Strip));
        if let ValidationOutcome::Valid(normalized) = validator.validate(&record) {
            prop_assert!(normalized.names().all(|name| validator.schema().is_declared(name)));
        }
    }

    #[test]
    fn validation_is_deterministic(record in any_record()) {
        let validator = Validator::new(schema());
        prop_assert_eq!(validator.validate(&record), validator.validate(&record));
    }
}

// ============================================================================
// AGGREGATION: every missing required field is reported
// ============================================================================

proptest! {
    #[test]
    fn missing_required_fields_are_named(record in any_record()) {
        let validator = Validator::new(schema());
        let outcome = validator.validate(&record);

        for field in ["type", "category_id"] {
            if record.value_or_empty(field).trim().is_empty() {
                let errors = outcome.errors();
                prop_assert!(errors.is_some_and(|e| e.contains_field(field)));
            }
        }
    }

    #[test]
    fn invalid_outcomes_are_never_empty(record in any_record()) {
        if let ValidationOutcome::Invalid(errors) = Validator::new(schema()).validate(&record) {
            prop_assert!(!errors.is_empty());
        }
    }

    #[test]
    fn failure_payload_is_always_a_json_array(record in any_record()) {
        if let Err(errors) = Validator::new(schema()).validate(&record).into_result() {
            let parsed: serde_json::Value = serde_json::from_str(&errors.to_string()).unwrap();
            prop_assert_eq!(parsed.as_array().map(Vec::len), Some(errors.len()));
        }
    }
}

// ============================================================================
// DECODING: non-JSON input is a decode error, never a validation failure
// ============================================================================

proptest! {
    #[test]
    fn non_json_input_is_a_decode_error(input in ".{0,40}") {
        prop_assume!(serde_json::from_str::<serde_json::Value>(&input).is_err());
        let err = Validator::new(schema()).validate_json(&input).unwrap_err();
        prop_assert!(matches!(err, ValidateError::Decode(DecodeError::Malformed(_))));
    }
}
