/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::value::FieldValue;
use serde::Serialize;
use std::fmt;

/// Where the value of a field comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Supplied by the caller and sent as a request parameter
    Input,
    /// Populated from the server response
    Output,
    /// Sent with the request and refreshed from the response
    Both,
}

impl Direction {
    /// Whether the field is sent with the request
    #[must_use]
    pub fn is_input(self) -> bool {
        matches!(self, Direction::Input | Direction::Both)
    }

    /// Whether the field is read from the response
    #[must_use]
    pub fn is_output(self) -> bool {
        matches!(self, Direction::Output | Direction::Both)
    }
}

/// Semantic type of a field
///
/// Map keys are always strings, as in JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Signed 64-bit integer
    Integer,
    /// Boolean, `"1"`/`"0"` on the wire
    Boolean,
    /// Decimal amount carried as its exact textual form
    Decimal,
    /// Homogeneous list
    List(Box<FieldType>),
    /// String-keyed map
    Map(Box<FieldType>),
    /// Value that may be `null`
    Optional(Box<FieldType>),
    /// Arbitrary JSON; nested shape is documented, not checked
    Json,
}

impl FieldType {
    /// `List<inner>`
    #[must_use]
    pub fn list(inner: FieldType) -> Self {
        FieldType::List(Box::new(inner))
    }

    /// `Map<String, inner>`
    #[must_use]
    pub fn map(inner: FieldType) -> Self {
        FieldType::Map(Box::new(inner))
    }

    /// `Optional<inner>`
    #[must_use]
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    /// Whether `null` is a member of this type
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        matches!(self, FieldType::Optional(_) | FieldType::Json)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Decimal => write!(f, "decimal"),
            FieldType::List(inner) => write!(f, "list<{inner}>"),
            FieldType::Map(inner) => write!(f, "map<string, {inner}>"),
            FieldType::Optional(inner) => write!(f, "optional<{inner}>"),
            FieldType::Json => write!(f, "json"),
        }
    }
}

/// Static metadata describing one field of a model
///
/// `default` is `None` when the field has no default at all, which is
/// different from a default of [`FieldValue::Null`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Stable key, used verbatim on the wire
    pub name: &'static str,
    /// Input, output or both
    pub direction: Direction,
    /// Declared type
    pub field_type: FieldType,
    /// Whether `null` (or absence) is a valid terminal state
    pub nullable: bool,
    /// Value held before the first execution
    pub default: Option<FieldValue>,
}

impl FieldDescriptor {
    /// Creates a non-nullable descriptor without default
    #[must_use]
    pub fn new(name: &'static str, direction: Direction, field_type: FieldType) -> Self {
        Self {
            name,
            direction,
            field_type,
            nullable: false,
            default: None,
        }
    }

    /// Input field
    #[must_use]
    pub fn input(name: &'static str, field_type: FieldType) -> Self {
        Self::new(name, Direction::Input, field_type)
    }

    /// Output field
    #[must_use]
    pub fn output(name: &'static str, field_type: FieldType) -> Self {
        Self::new(name, Direction::Output, field_type)
    }

    /// Field sent with the request and refreshed from the response
    #[must_use]
    pub fn both(name: &'static str, field_type: FieldType) -> Self {
        Self::new(name, Direction::Both, field_type)
    }

    /// Marks the field as nullable
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the value held before the first execution
    #[must_use]
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether `null` is acceptable for this field
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        self.nullable || self.field_type.accepts_null()
    }

    /// Whether `execute` can proceed without the caller setting this field
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.direction.is_input() && self.default.is_none() && !self.accepts_null()
    }
}
