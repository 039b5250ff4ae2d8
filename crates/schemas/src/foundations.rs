//! Field and entity specifications shared by every generated db entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object column (`jsonb` on the storage side).
pub type ArbitraryObject = Map<String, Value>;

/// Shape a field value must have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    /// Whole number fitting `i64` (timestamps in epoch milliseconds).
    Integer,
    Boolean,
    /// Any JSON object.
    Object,
}

impl FieldKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Object => value.is_object(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Object => "object",
        }
    }
}

impl core::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type name of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Default applied to an optional field that was left out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    /// `{}`
    EmptyObject,
    /// Current time in epoch milliseconds.
    Now,
}

impl FieldDefault {
    pub fn resolve(self, now: DateTime<Utc>) -> Value {
        match self {
            FieldDefault::EmptyObject => Value::Object(Map::new()),
            FieldDefault::Now => Value::from(now.timestamp_millis()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional(FieldDefault),
}

/// One field of an entity: logical name, storage column, and shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn required(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            presence: Presence::Required,
        }
    }

    pub const fn optional(
        name: &'static str,
        column: &'static str,
        kind: FieldKind,
        default: FieldDefault,
    ) -> Self {
        Self {
            name,
            column,
            kind,
            presence: Presence::Optional(default),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

/// What the guard does with keys no field declares.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Drop them from the normalized output.
    #[default]
    Strip,
    /// Report each one as an issue.
    Reject,
}

/// Static definition of a persisted entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EntitySpec {
    pub table: &'static str,
    pub table_singular: &'static str,
    pub fields: &'static [FieldSpec],
    pub unknown_keys: UnknownKeys,
}
