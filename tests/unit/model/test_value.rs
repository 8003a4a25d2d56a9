use serde_json::json;
use wl_model::prelude::*;

fn coerce(field_type: FieldType, raw: Value) -> Result<FieldValue, AppError> {
    FieldValue::coerce(&field_type, raw, "value")
}

#[test]
fn test_integer_coercion() {
    assert_eq!(
        coerce(FieldType::Integer, json!(42)).unwrap(),
        FieldValue::Integer(42)
    );
    assert_eq!(
        coerce(FieldType::Integer, json!(" 42 ")).unwrap(),
        FieldValue::Integer(42)
    );
    assert!(coerce(FieldType::Integer, json!(1.5)).is_err());
    assert!(coerce(FieldType::Integer, json!("4x")).is_err());
    assert!(coerce(FieldType::Integer, json!(true)).is_err());
}

#[test]
fn test_boolean_coercion() {
    for raw in [json!(true), json!(1), json!("1"), json!("true")] {
        assert_eq!(
            coerce(FieldType::Boolean, raw).unwrap(),
            FieldValue::Boolean(true)
        );
    }
    for raw in [json!(false), json!(0), json!("0"), json!("false")] {
        assert_eq!(
            coerce(FieldType::Boolean, raw).unwrap(),
            FieldValue::Boolean(false)
        );
    }
    assert!(coerce(FieldType::Boolean, json!(2)).is_err());
    assert!(coerce(FieldType::Boolean, json!("yes")).is_err());
}

#[test]
fn test_string_accepts_numbers() {
    assert_eq!(
        coerce(FieldType::String, json!(17)).unwrap(),
        FieldValue::String("17".to_string())
    );
    assert!(coerce(FieldType::String, json!({})).is_err());
}

#[test]
fn test_decimal_coercion() {
    let value = coerce(FieldType::Decimal, json!("12.50")).unwrap();
    assert_eq!(value.as_str(), Some("12.50"));

    let value = coerce(FieldType::Decimal, json!(7)).unwrap();
    assert_eq!(value.as_str(), Some("7"));

    match coerce(FieldType::Decimal, json!("12,50")) {
        Err(AppError::TypeMismatch {
            field, expected, ..
        }) => {
            assert_eq!(field, "value");
            assert_eq!(expected, "decimal");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_decimal_from_json_numbers() {
    let large = coerce(FieldType::Decimal, json!(1e20)).unwrap();
    assert_eq!(large.as_str(), Some("100000000000000000000"));

    // trailing zeros of a JSON number are gone once parsed
    let price = coerce(FieldType::Decimal, json!(12.50)).unwrap();
    assert_eq!(price.as_str(), Some("12.5"));

    let small: DecimalString = serde_json::from_value(json!(0.0001)).unwrap();
    assert_eq!(small.as_str(), "0.0001");
    let big: DecimalString = serde_json::from_value(json!(u64::MAX)).unwrap();
    assert_eq!(big.as_str(), "18446744073709551615");
}

#[test]
fn test_decimal_string_parsing() {
    let amount: DecimalString = "-0.05".parse().unwrap();
    assert_eq!(amount.as_str(), "-0.05");
    assert_eq!(amount.to_string(), "-0.05");
    assert!("1.2.3".parse::<DecimalString>().is_err());

    let from_number: DecimalString = serde_json::from_value(json!(3)).unwrap();
    assert_eq!(from_number.as_str(), "3");
    assert!(serde_json::from_value::<DecimalString>(json!(null)).is_err());
    assert_eq!(serde_json::to_value(&amount).unwrap(), json!("-0.05"));
}

#[test]
fn test_optional_and_json() {
    assert!(
        coerce(FieldType::optional(FieldType::Integer), Value::Null)
            .unwrap()
            .is_null()
    );
    assert_eq!(
        coerce(FieldType::optional(FieldType::Integer), json!("3")).unwrap(),
        FieldValue::Integer(3)
    );
    assert!(coerce(FieldType::Json, Value::Null).unwrap().is_null());

    let raw = json!({"nested": [1, "two", null]});
    assert_eq!(
        coerce(FieldType::Json, raw.clone()).unwrap().as_json(),
        Some(&raw)
    );
    assert!(coerce(FieldType::String, Value::Null).is_err());
}

#[test]
fn test_list_and_map_paths() {
    let err = coerce(FieldType::list(FieldType::Integer), json!([1, 2, "x"])).unwrap_err();
    match err {
        AppError::TypeMismatch { field, .. } => assert_eq!(field, "value[2]"),
        other => panic!("unexpected error: {other}"),
    }

    let err = coerce(FieldType::map(FieldType::Integer), json!({"a": 1, "b": []})).unwrap_err();
    match err {
        AppError::TypeMismatch { field, found, .. } => {
            assert_eq!(field, "value.b");
            assert_eq!(found, "array");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(coerce(FieldType::map(FieldType::Integer), json!([1])).is_err());
}

#[test]
fn test_wire_params_flatten_nested_values() {
    let value = coerce(
        FieldType::map(FieldType::list(FieldType::String)),
        json!({"C2": ["b"], "C1": ["a", "c"]}),
    )
    .unwrap();

    let mut params = Vec::new();
    value.append_wire_params("a_session", &mut params);
    assert_eq!(
        params,
        vec![
            ("a_session[C1][0]".to_string(), "a".to_string()),
            ("a_session[C1][1]".to_string(), "c".to_string()),
            ("a_session[C2][0]".to_string(), "b".to_string()),
        ]
    );
}

#[test]
fn test_wire_params_for_json_and_null() {
    let mut params = Vec::new();
    FieldValue::Json(json!({"a_id": [5, null], "is_on": true}))
        .append_wire_params("a_filter", &mut params);
    FieldValue::Null.append_wire_params("k_skip", &mut params);
    assert_eq!(
        params,
        vec![
            ("a_filter[a_id][0]".to_string(), "5".to_string()),
            ("a_filter[is_on]".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn test_to_json_round_trip() {
    let raw = json!({"s_title": "10 classes", "f_price": "12.50"});
    let value = coerce(FieldType::map(FieldType::String), raw.clone()).unwrap();
    assert_eq!(value.to_json(), raw);
    assert_eq!(Value::from(FieldValue::Integer(2)), json!(2));
}
