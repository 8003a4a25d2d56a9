/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tagged field values and the coercion rules applied to caller input and
//! server output alike.

use crate::error::AppError;
use crate::model::field::FieldType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("decimal pattern is valid"));

/// Decimal amount kept in its exact textual form
///
/// `"12.50"` stays `"12.50"`: the value is never routed through a float.
/// Only string input keeps its exact text. A JSON number has already lost
/// its trailing zeros when parsed, so `12.50` arrives as `"12.5"`; floats are
/// written in plain positional notation, never in exponent form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecimalString(String);

impl DecimalString {
    /// Parses a decimal-formatted string, `None` if it is not one
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if DECIMAL_PATTERN.is_match(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// The exact text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DecimalString {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::TypeMismatch {
            field: "<decimal>".to_string(),
            expected: FieldType::Decimal.to_string(),
            found: format!("string {s:?}"),
        })
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DecimalString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => number_text(&n),
            other => {
                return Err(de::Error::custom(format!(
                    "expected decimal, found {}",
                    json_kind(&other)
                )));
            }
        };
        Self::parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid decimal {raw:?}")))
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Explicit `null`
    #[default]
    Null,
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Decimal amount
    Decimal(DecimalString),
    /// List of values
    List(Vec<FieldValue>),
    /// String-keyed map, iterated in key order
    Map(BTreeMap<String, FieldValue>),
    /// Opaque JSON
    Json(Value),
}

impl FieldValue {
    /// Converts a raw JSON value into the declared type
    ///
    /// `path` names the value in error messages (`a_session.C1[0]`).
    /// Coercions: numeric strings to numbers and back, `1`/`0`,
    /// `"1"`/`"0"` and `"true"`/`"false"` to booleans, and an empty JSON
    /// array to an empty map.
    pub fn coerce(field_type: &FieldType, raw: Value, path: &str) -> Result<Self, AppError> {
        match (field_type, raw) {
            (FieldType::Optional(_) | FieldType::Json, Value::Null) => Ok(FieldValue::Null),
            (FieldType::Optional(inner), raw) => Self::coerce(inner, raw, path),
            (FieldType::Json, raw) => Ok(FieldValue::Json(raw)),
            (FieldType::String, Value::String(s)) => Ok(FieldValue::String(s)),
            (FieldType::String, Value::Number(n)) => Ok(FieldValue::String(n.to_string())),
            (FieldType::Integer, Value::Number(n)) => match n.as_i64() {
                Some(i) => Ok(FieldValue::Integer(i)),
                None => Err(mismatch(field_type, path, format!("number {n}"))),
            },
            (FieldType::Integer, Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Ok(FieldValue::Integer(i)),
                Err(_) => Err(mismatch(field_type, path, format!("string {s:?}"))),
            },
            (FieldType::Boolean, Value::Bool(b)) => Ok(FieldValue::Boolean(b)),
            (FieldType::Boolean, Value::Number(n)) => match n.as_i64() {
                Some(0) => Ok(FieldValue::Boolean(false)),
                Some(1) => Ok(FieldValue::Boolean(true)),
                _ => Err(mismatch(field_type, path, format!("number {n}"))),
            },
            (FieldType::Boolean, Value::String(s)) => match s.as_str() {
                "1" | "true" => Ok(FieldValue::Boolean(true)),
                "0" | "false" => Ok(FieldValue::Boolean(false)),
                _ => Err(mismatch(field_type, path, format!("string {s:?}"))),
            },
            (FieldType::Decimal, Value::String(s)) => DecimalString::parse(&s)
                .map(FieldValue::Decimal)
                .ok_or_else(|| mismatch(field_type, path, format!("string {s:?}"))),
            (FieldType::Decimal, Value::Number(n)) => DecimalString::parse(&number_text(&n))
                .map(FieldValue::Decimal)
                .ok_or_else(|| mismatch(field_type, path, format!("number {n}"))),
            (FieldType::List(inner), Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::coerce(inner, item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            (FieldType::Map(inner), Value::Object(entries)) => entries
                .into_iter()
                .map(|(key, item)| {
                    let value = Self::coerce(inner, item, &format!("{path}.{key}"))?;
                    Ok((key, value))
                })
                .collect::<Result<BTreeMap<_, _>, AppError>>()
                .map(FieldValue::Map),
            // Empty PHP arrays are encoded as `[]` even where a map is expected.
            (FieldType::Map(_), Value::Array(items)) if items.is_empty() => {
                Ok(FieldValue::Map(BTreeMap::new()))
            }
            (_, raw) => Err(mismatch(field_type, path, json_kind(&raw).to_string())),
        }
    }

    /// Whether the value is `null`
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text of a string or decimal value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            FieldValue::Decimal(d) => Some(d.as_str()),
            _ => None,
        }
    }

    /// Integer value
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean value
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Decimal value
    #[must_use]
    pub fn as_decimal(&self) -> Option<&DecimalString> {
        match self {
            FieldValue::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// List items
    #[must_use]
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Map entries
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Opaque JSON payload
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Json(v) => Some(v),
            _ => None,
        }
    }

    /// JSON representation; decimals become strings
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Integer(i) => Value::Number(Number::from(*i)),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::Decimal(d) => Value::String(d.as_str().to_string()),
            FieldValue::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            FieldValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
            FieldValue::Json(v) => v.clone(),
        }
    }

    /// Appends the wire form of this value under `key`
    ///
    /// Nested lists and maps are flattened with bracket notation
    /// (`a_session[C1][0]`); `null` produces no parameter.
    pub fn append_wire_params(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            FieldValue::Null => {}
            FieldValue::String(s) => out.push((key.to_string(), s.clone())),
            FieldValue::Integer(i) => out.push((key.to_string(), i.to_string())),
            FieldValue::Boolean(b) => out.push((key.to_string(), wire_bool(*b))),
            FieldValue::Decimal(d) => out.push((key.to_string(), d.as_str().to_string())),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    item.append_wire_params(&format!("{key}[{i}]"), out);
                }
            }
            FieldValue::Map(entries) => {
                for (k, item) in entries {
                    item.append_wire_params(&format!("{key}[{k}]"), out);
                }
            }
            FieldValue::Json(v) => append_json_params(v, key, out),
        }
    }
}

fn append_json_params(value: &Value, key: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((key.to_string(), wire_bool(*b))),
        Value::Number(n) => out.push((key.to_string(), n.to_string())),
        Value::String(s) => out.push((key.to_string(), s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                append_json_params(item, &format!("{key}[{i}]"), out);
            }
        }
        Value::Object(entries) => {
            for (k, item) in entries {
                append_json_params(item, &format!("{key}[{k}]"), out);
            }
        }
    }
}

/// Positional text of a JSON number; `1e20` becomes `100000000000000000000`
fn number_text(n: &Number) -> String {
    match (n.as_i64(), n.as_u64(), n.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (None, Some(u), _) => u.to_string(),
        (None, None, Some(f)) => format!("{f}"),
        (None, None, None) => n.to_string(),
    }
}

fn wire_bool(b: bool) -> String {
    let flag = if b { "1" } else { "0" };
    flag.to_string()
}

fn mismatch(expected: &FieldType, path: &str, found: String) -> AppError {
    AppError::TypeMismatch {
        field: path.to_string(),
        expected: expected.to_string(),
        found,
    }
}

/// Short name of the JSON kind of `value`
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        value.to_json()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DecimalString> for FieldValue {
    fn from(value: DecimalString) -> Self {
        FieldValue::Decimal(value)
    }
}
