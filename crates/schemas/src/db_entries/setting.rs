//! Tenant-wide settings (`settings` table).
//!
//! `adminConsole` holds the console's own preferences and onboarding flags as
//! a JSON object; its inner shape belongs to the console.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::descriptor::GeneratedSchema;
use crate::foundations::{ArbitraryObject, EntitySpec, FieldKind, FieldSpec, UnknownKeys};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetting {
    pub id: String,
    pub admin_console: ArbitraryObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub admin_console: ArbitraryObject,
}

impl From<CreateSetting> for Setting {
    fn from(value: CreateSetting) -> Self {
        Self {
            id: value.id,
            admin_console: value.admin_console,
        }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("id", "id", FieldKind::String),
    FieldSpec::required("adminConsole", "admin_console", FieldKind::Object),
];

pub const SETTING_SPEC: EntitySpec = EntitySpec {
    table: "settings",
    table_singular: "setting",
    fields: FIELDS,
    unknown_keys: UnknownKeys::Reject,
};

pub static SETTINGS: LazyLock<GeneratedSchema<CreateSetting>> =
    LazyLock::new(|| super::generated(&SETTING_SPEC));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;
    use crate::guard::validate_create_input;
    use serde_json::json;

    #[test]
    fn descriptor_shape() {
        assert_eq!(SETTINGS.table(), "settings");
        assert_eq!(SETTINGS.field_keys(), ["id", "adminConsole"]);
        assert_eq!(SETTINGS.column("adminConsole"), Some("admin_console"));
    }

    #[test]
    fn rejects_unknown_columns() {
        let err = validate_create_input(
            SETTINGS.create_guard(),
            &json!({ "id": "default", "adminConsole": {}, "customDomain": "x" }),
        )
        .unwrap_err();
        assert_eq!(err.issue_for("customDomain").unwrap().kind, IssueKind::Unrecognized);
    }

    #[test]
    fn accepts_console_object() {
        let setting: Setting = validate_create_input(
            SETTINGS.create_guard(),
            &json!({ "id": "default", "adminConsole": { "demoChecked": true } }),
        )
        .unwrap()
        .into();
        assert_eq!(setting.admin_console.get("demoChecked"), Some(&json!(true)));
    }
}
