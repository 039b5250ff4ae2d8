//! Create guards: shape checks for creation inputs.

use core::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FieldIssue, IssueKind, ValidationError};
use crate::foundations::{json_type_name, EntitySpec, FieldSpec, Presence, UnknownKeys};

/// Validator for the creation input `T` of one entity.
///
/// A guard is a view over the entity's static field list; it is `Copy` and
/// carries no state between calls.
pub struct Guard<T> {
    entity: &'static str,
    fields: &'static [FieldSpec],
    unknown_keys: UnknownKeys,
    _input: PhantomData<fn() -> T>,
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Guard<T> {}

impl<T> core::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Guard")
            .field("entity", &self.entity)
            .field("fields", &self.fields.iter().map(|f| f.name).collect::<Vec<_>>())
            .field("unknown_keys", &self.unknown_keys)
            .finish()
    }
}

impl<T> Guard<T> {
    pub(crate) fn from_spec(spec: &EntitySpec) -> Self {
        Self {
            entity: spec.table_singular,
            fields: spec.fields,
            unknown_keys: spec.unknown_keys,
            _input: PhantomData,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    /// Same guard, but unknown keys are reported instead of dropped.
    pub fn strict(self) -> Self {
        Self {
            unknown_keys: UnknownKeys::Reject,
            ..self
        }
    }

    /// Check `candidate` and return it normalized: declared fields only, in
    /// declaration order, with defaults filled in for absent optional fields.
    pub fn check_at(
        &self,
        candidate: &Value,
        now: DateTime<Utc>,
    ) -> Result<Map<String, Value>, ValidationError> {
        let Some(object) = candidate.as_object() else {
            return Err(self.fail(vec![FieldIssue::new(
                "",
                IssueKind::TypeMismatch {
                    expected: crate::foundations::FieldKind::Object,
                    found: json_type_name(candidate),
                },
            )]));
        };

        let mut issues = Vec::new();
        let mut normalized = Map::with_capacity(self.fields.len());

        for field in self.fields {
            match (object.get(field.name), field.presence) {
                (Some(value), _) if field.kind.accepts(value) => {
                    normalized.insert(field.name.to_string(), value.clone());
                }
                (Some(value), _) => issues.push(FieldIssue::new(
                    field.name,
                    IssueKind::TypeMismatch {
                        expected: field.kind,
                        found: json_type_name(value),
                    },
                )),
                (None, Presence::Required) => {
                    issues.push(FieldIssue::new(field.name, IssueKind::Missing));
                }
                (None, Presence::Optional(default)) => {
                    normalized.insert(field.name.to_string(), default.resolve(now));
                }
            }
        }

        if self.unknown_keys == UnknownKeys::Reject {
            for key in object.keys() {
                if !self.fields.iter().any(|field| field.name == key) {
                    issues.push(FieldIssue::new(key.as_str(), IssueKind::Unrecognized));
                }
            }
        }

        if issues.is_empty() {
            Ok(normalized)
        } else {
            Err(self.fail(issues))
        }
    }

    fn fail(&self, issues: Vec<FieldIssue>) -> ValidationError {
        tracing::debug!(
            entity = self.entity,
            issues = issues.len(),
            "create input rejected"
        );
        ValidationError {
            entity: self.entity,
            issues,
        }
    }
}

impl<T: DeserializeOwned> Guard<T> {
    /// Check and decode `candidate` into the creation input type.
    pub fn parse_at(&self, candidate: &Value, now: DateTime<Utc>) -> Result<T, ValidationError> {
        let normalized = self.check_at(candidate, now)?;
        serde_json::from_value(Value::Object(normalized)).map_err(|e| {
            self.fail(vec![FieldIssue::new(
                "",
                IssueKind::Malformed {
                    reason: e.to_string(),
                },
            )])
        })
    }
}

/// Validate a creation input, filling defaults relative to the current time.
///
/// Callers must not persist anything when this fails.
pub fn validate_create_input<T: DeserializeOwned>(
    guard: &Guard<T>,
    candidate: &Value,
) -> Result<T, ValidationError> {
    validate_create_input_at(guard, candidate, Utc::now())
}

/// [`validate_create_input`] with an explicit clock.
pub fn validate_create_input_at<T: DeserializeOwned>(
    guard: &Guard<T>,
    candidate: &Value,
    now: DateTime<Utc>,
) -> Result<T, ValidationError> {
    guard.parse_at(candidate, now)
}
