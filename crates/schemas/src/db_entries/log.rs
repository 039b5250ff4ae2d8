//! Audit log entries (`logs` table).

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::descriptor::GeneratedSchema;
use crate::foundations::{
    ArbitraryObject, EntitySpec, FieldDefault, FieldKind, FieldSpec, UnknownKeys,
};

/// Input accepted when recording a log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLog {
    pub id: String,
    #[serde(rename = "type")]
    pub log_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ArbitraryObject>,
    /// Epoch milliseconds. Any JSON number, as sent by browser clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
}

/// A stored log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub id: String,
    #[serde(rename = "type")]
    pub log_type: String,
    pub payload: ArbitraryObject,
    pub created_at: f64,
}

impl CreateLog {
    pub fn new(id: impl Into<String>, log_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            log_type: log_type.into(),
            payload: None,
            created_at: None,
        }
    }

    /// Resolve optional fields the same way the create guard defaults them.
    pub fn into_record(self, now: DateTime<Utc>) -> Log {
        Log {
            id: self.id,
            log_type: self.log_type,
            payload: self.payload.unwrap_or_default(),
            created_at: self
                .created_at
                .unwrap_or_else(|| now.timestamp_millis() as f64),
        }
    }
}

impl Log {
    /// `None` for non-finite or out-of-range timestamps; sub-millisecond
    /// fractions are truncated.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if !self.created_at.is_finite() {
            return None;
        }
        Utc.timestamp_millis_opt(self.created_at.trunc() as i64).single()
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("id", "id", FieldKind::String),
    FieldSpec::required("type", "type", FieldKind::String),
    FieldSpec::optional("payload", "payload", FieldKind::Object, FieldDefault::EmptyObject),
    FieldSpec::optional("createdAt", "created_at", FieldKind::Number, FieldDefault::Now),
];

pub const LOG_SPEC: EntitySpec = EntitySpec {
    table: "logs",
    table_singular: "log",
    fields: FIELDS,
    unknown_keys: UnknownKeys::Strip,
};

pub static LOGS: LazyLock<GeneratedSchema<CreateLog>> =
    LazyLock::new(|| super::generated(&LOG_SPEC));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;
    use crate::guard::{validate_create_input, validate_create_input_at};
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn descriptor_shape() {
        assert_eq!(LOGS.table(), "logs");
        assert_eq!(LOGS.table_singular(), "log");
        assert_eq!(LOGS.field_keys(), ["id", "type", "payload", "createdAt"]);
        assert_eq!(LOGS.column("createdAt"), Some("created_at"));
        assert_eq!(LOGS.column("payload"), Some("payload"));
    }

    #[test]
    fn minimal_input_is_normalized_with_defaults() {
        let input = validate_create_input_at(
            LOGS.create_guard(),
            &json!({ "id": "log_1", "type": "SignInUsernamePassword" }),
            now(),
        )
        .unwrap();

        assert_eq!(input.id, "log_1");
        assert_eq!(input.log_type, "SignInUsernamePassword");
        assert_eq!(input.payload, Some(ArbitraryObject::new()));
        assert_eq!(input.created_at, Some(now().timestamp_millis() as f64));
    }

    #[test]
    fn provided_values_are_kept() {
        let input = validate_create_input(
            LOGS.create_guard(),
            &json!({
                "id": "log_2",
                "type": "RegisterEmail",
                "payload": { "result": "Success", "ip": "127.0.0.1" },
                "createdAt": 1_650_000_000_000_i64,
            }),
        )
        .unwrap();

        assert_eq!(input.created_at, Some(1_650_000_000_000.0));
        let payload = input.payload.unwrap();
        assert_eq!(payload.get("result"), Some(&json!("Success")));
    }

    #[test]
    fn float_timestamps_are_accepted() {
        for created_at in [json!(1_650_000_000_000.0), json!(1.65e12), json!(1_650_000_000_000.5)] {
            let input = validate_create_input(
                LOGS.create_guard(),
                &json!({ "id": "log_f", "type": "SignIn", "createdAt": created_at }),
            )
            .unwrap();
            assert_eq!(input.created_at.map(f64::trunc), Some(1_650_000_000_000.0));
        }
    }

    #[test]
    fn created_at_must_be_a_number() {
        let err = validate_create_input(
            LOGS.create_guard(),
            &json!({ "id": "log_n", "type": "SignIn", "createdAt": "yesterday" }),
        )
        .unwrap_err();
        assert_eq!(err.paths().collect::<Vec<_>>(), ["createdAt"]);
        assert!(matches!(err.issues[0].kind, IssueKind::TypeMismatch { .. }));
    }

    #[test]
    fn created_at_utc_truncates_fractions() {
        let mut log = CreateLog::new("log_t", "SignIn").into_record(now());
        log.created_at += 0.75;
        assert_eq!(log.created_at_utc(), Some(now()));

        log.created_at = f64::NAN;
        assert_eq!(log.created_at_utc(), None);
    }

    #[test]
    fn missing_type_is_named() {
        let err = validate_create_input(LOGS.create_guard(), &json!({ "id": "log_3" })).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "type");
        assert_eq!(err.issues[0].kind, IssueKind::Missing);
    }

    #[test]
    fn payload_must_be_an_object() {
        let err = validate_create_input(
            LOGS.create_guard(),
            &json!({ "id": "log_4", "type": "x", "payload": "oops" }),
        )
        .unwrap_err();
        assert_eq!(err.paths().collect::<Vec<_>>(), ["payload"]);
    }

    #[test]
    fn into_record_resolves_defaults() {
        let log = CreateLog::new("log_5", "SignIn").into_record(now());
        assert!(log.payload.is_empty());
        assert_eq!(log.created_at_utc(), Some(now()));

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["type"], "SignIn");
        assert_eq!(json["createdAt"], now().timestamp_millis() as f64);
    }
}
