//! Integration tests for the opinion interchange record
//!
//! Opinions cross process boundaries as JSON objects with exactly the
//! fields `belief`, `disbelief`, `uncertainty` and `base_rate`.

use serde_json::{json, Value};
use sublogic_domain::{Opinion, OpinionError, OpinionRecord};

#[test]
fn test_serialize_field_names() {
    let opinion = Opinion::new(0.6, 0.3, 0.1, 0.5).unwrap();
    let value = serde_json::to_value(opinion).unwrap();

    let object = value.as_object().expect("opinion should serialize as an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["base_rate", "belief", "disbelief", "uncertainty"]);
    assert_eq!(value["belief"], json!(0.6));
    assert_eq!(value["base_rate"], json!(0.5));
}

#[test]
fn test_json_round_trip_preserves_values() {
    let opinion = Opinion::new(0.091, 0.604, 0.305, 0.4).unwrap();
    let text = serde_json::to_string(&opinion).unwrap();
    let back: Opinion = serde_json::from_str(&text).unwrap();
    assert_eq!(back.as_tuple(), opinion.as_tuple());
}

#[test]
fn test_deserialize_validates() {
    let result: Result<Opinion, _> = serde_json::from_value(json!({
        "belief": 0.7,
        "disbelief": 0.7,
        "uncertainty": 0.0,
        "base_rate": 0.5
    }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid opinion"), "{}", err);
}

#[test]
fn test_deserialize_rejects_null_opinion() {
    let result: Result<Opinion, _> = serde_json::from_value(json!({
        "belief": 0.0,
        "disbelief": 0.0,
        "uncertainty": 0.0,
        "base_rate": 0.0
    }));
    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_missing_field() {
    let result: Result<Opinion, _> = serde_json::from_value(json!({
        "belief": 0.6,
        "disbelief": 0.3,
        "uncertainty": 0.1
    }));
    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_unknown_field() {
    let result: Result<Opinion, _> = serde_json::from_value(json!({
        "belief": 0.6,
        "disbelief": 0.3,
        "uncertainty": 0.1,
        "base_rate": 0.5,
        "weight": 2.0
    }));
    assert!(result.is_err());
}

#[test]
fn test_record_is_unvalidated_until_converted() {
    let record: OpinionRecord = serde_json::from_value(json!({
        "belief": 1.5,
        "disbelief": 0.0,
        "uncertainty": 0.0,
        "base_rate": 0.5
    }))
    .unwrap();

    let err = Opinion::try_from(record).unwrap_err();
    assert!(matches!(err, OpinionError::InvalidOpinion { belief, .. } if belief == 1.5));
}

#[test]
fn test_deserialize_list_of_opinions() {
    let value = json!([
        { "belief": 0.6, "disbelief": 0.3, "uncertainty": 0.1, "base_rate": 0.0 },
        { "belief": 0.0, "disbelief": 0.0, "uncertainty": 1.0, "base_rate": 0.5 }
    ]);
    let opinions: Vec<Opinion> = serde_json::from_value(value).unwrap();
    assert_eq!(opinions.len(), 2);
    assert!(opinions[1].compare(&Opinion::vacuous(0.5).unwrap()));
}

#[test]
fn test_text_form_matches_record() {
    let opinion: Opinion = "0.6, 0.3, 0.1, 0".parse().unwrap();
    let record = opinion.to_record();
    assert_eq!(record.belief, 0.6);
    assert_eq!(record.disbelief, 0.3);
    assert_eq!(record.uncertainty, 0.1);
    assert_eq!(record.base_rate, 0.0);
    assert_eq!(opinion.to_string(), "0.6, 0.3, 0.1, 0");
}
