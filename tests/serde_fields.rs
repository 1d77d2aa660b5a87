//! Validating decoded JSON request bodies
#![cfg(feature = "serde")]

use plumbline::refined::{EmailAddress, Iban};
use plumbline::{are_set, FieldError, FieldSet, Key, Validator, ValidatorConfig, Value};
use serde::Deserialize;

#[test]
fn test_json_body_validates_like_a_built_field_set() {
    let body = r#"{
        "email": "ops@example.com",
        "amount": 12.5,
        "iban": "NL20INGB0001234567",
        "tags": ["payout", "eur"],
        "note": null
    }"#;
    let fields: FieldSet = serde_json::from_str(body).unwrap();

    assert!(are_set(&fields, ["email", "amount", "iban", "tags", "note"]));

    let validator = Validator::new();
    let expectations = validator.expectations([
        ("email", "validate_mail"),
        ("amount", "number"),
        ("iban", "validate_iban"),
        ("tags", "array"),
        ("note", "null"),
    ]);
    assert!(validator.are_mixed(&fields, &expectations));
}

#[test]
fn test_json_array_body_uses_index_keys() {
    let fields: FieldSet = serde_json::from_str(r#"[3, "5", 6.0, "seven"]"#).unwrap();
    assert_eq!(fields.get(1), Some(&Value::from("5")));
    assert!(plumbline::are_numeric(&fields, [0, 1, 2]));
    assert!(!plumbline::are_numeric(&fields, [3]));
}

#[test]
fn test_errors_name_json_keys() {
    let fields: FieldSet = serde_json::from_str(r#"{"2": "", "name": 5}"#).unwrap();
    let validator = Validator::new();
    let expectations = validator.expectations([(2, "string"), (0, "string")]);

    let errors = validator
        .validate_fields(&fields, &expectations)
        .into_result()
        .unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::EmptyString(Key::Index(2)),
            FieldError::Missing(Key::Index(0)),
        ]
    );
}

#[test]
fn test_config_from_json() {
    let config: ValidatorConfig = serde_json::from_str(r#"{"empty_strings":"dispatch"}"#).unwrap();
    let validator = Validator::new().with_config(config);
    let fields: FieldSet = serde_json::from_str(r#"{"note": ""}"#).unwrap();

    assert!(validator.are_mixed(&fields, &validator.expectations([("note", "string")])));
}

#[derive(Debug, Deserialize)]
struct Payout {
    contact: EmailAddress,
    account: Iban,
}

#[test]
fn test_refined_fields_reject_invalid_input() {
    let ok: Payout =
        serde_json::from_str(r#"{"contact":"ops@example.com","account":"BE68539007547034"}"#)
            .unwrap();
    assert_eq!(ok.contact.get(), "ops@example.com");
    assert_eq!(ok.account.get(), "BE68539007547034");

    let bad = serde_json::from_str::<Payout>(
        r#"{"contact":"ops@","account":"BE68539007547034"}"#,
    );
    assert!(bad.is_err());
}
