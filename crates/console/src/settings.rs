//! Admin console settings: snapshot, partial updates, and the service seam.
//!
//! The console's preferences live in the `adminConsole` object of the
//! `settings` row. Updates are partial and merged key by key, so two updates
//! touching different flags commute; two updates to the same flag are
//! last-write-wins in the order they reach the service.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use idconsole_core::{Language, ValueObject};
use idconsole_schemas::{validate_create_input, ArbitraryObject, CreateSetting, Setting, SETTINGS};

use crate::theme::AppearanceMode;

/// Snapshot of the console preferences and onboarding flags.
///
/// Every flag defaults to `false`: nothing counts as done until the stored
/// settings say so.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConsoleSettings {
    pub language: Language,
    pub appearance_mode: AppearanceMode,
    pub experience_notice_confirmed: bool,
    pub hide_get_started: bool,
    pub demo_checked: bool,
    pub application_created: bool,
    pub sign_in_experience_customized: bool,
    pub passwordless_configured: bool,
    pub social_sign_in_configured: bool,
    pub further_readings_checked: bool,
}

impl ValueObject for AdminConsoleSettings {}

impl AdminConsoleSettings {
    /// Decode the `adminConsole` column of a settings row.
    pub fn from_admin_console(object: &ArbitraryObject) -> Result<Self, SettingsError> {
        serde_json::from_value(Value::Object(object.clone()))
            .map_err(|e| SettingsError::Malformed(e.to_string()))
    }

    /// Decode key by key: a malformed value falls back to its default without
    /// touching the others. Returns the keys that were skipped.
    pub fn from_admin_console_lossy(object: &ArbitraryObject) -> (Self, Vec<&'static str>) {
        if let Ok(settings) = Self::from_admin_console(object) {
            return (settings, Vec::new());
        }

        let mut skipped = Vec::new();
        let settings = Self {
            language: read_key(object, "language", &mut skipped),
            appearance_mode: read_key(object, "appearanceMode", &mut skipped),
            experience_notice_confirmed: read_key(object, "experienceNoticeConfirmed", &mut skipped),
            hide_get_started: read_key(object, "hideGetStarted", &mut skipped),
            demo_checked: read_flag(object, CompletionFlag::DemoChecked, &mut skipped),
            application_created: read_flag(object, CompletionFlag::ApplicationCreated, &mut skipped),
            sign_in_experience_customized: read_flag(
                object,
                CompletionFlag::SignInExperienceCustomized,
                &mut skipped,
            ),
            passwordless_configured: read_flag(
                object,
                CompletionFlag::PasswordlessConfigured,
                &mut skipped,
            ),
            social_sign_in_configured: read_flag(
                object,
                CompletionFlag::SocialSignInConfigured,
                &mut skipped,
            ),
            further_readings_checked: read_flag(
                object,
                CompletionFlag::FurtherReadingsChecked,
                &mut skipped,
            ),
        };
        (settings, skipped)
    }

    pub fn is_complete(&self, flag: CompletionFlag) -> bool {
        match flag {
            CompletionFlag::DemoChecked => self.demo_checked,
            CompletionFlag::ApplicationCreated => self.application_created,
            CompletionFlag::SignInExperienceCustomized => self.sign_in_experience_customized,
            CompletionFlag::PasswordlessConfigured => self.passwordless_configured,
            CompletionFlag::SocialSignInConfigured => self.social_sign_in_configured,
            CompletionFlag::FurtherReadingsChecked => self.further_readings_checked,
        }
    }
}

fn read_key<T: DeserializeOwned + Default>(
    object: &ArbitraryObject,
    key: &'static str,
    skipped: &mut Vec<&'static str>,
) -> T {
    match object.get(key) {
        None => T::default(),
        Some(value) => T::deserialize(value).unwrap_or_else(|_| {
            skipped.push(key);
            T::default()
        }),
    }
}

fn read_flag(object: &ArbitraryObject, flag: CompletionFlag, skipped: &mut Vec<&'static str>) -> bool {
    read_key(object, flag.key(), skipped)
}

/// Onboarding steps tracked in the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionFlag {
    DemoChecked,
    ApplicationCreated,
    SignInExperienceCustomized,
    PasswordlessConfigured,
    SocialSignInConfigured,
    FurtherReadingsChecked,
}

impl CompletionFlag {
    pub const ALL: [CompletionFlag; 6] = [
        CompletionFlag::DemoChecked,
        CompletionFlag::ApplicationCreated,
        CompletionFlag::SignInExperienceCustomized,
        CompletionFlag::PasswordlessConfigured,
        CompletionFlag::SocialSignInConfigured,
        CompletionFlag::FurtherReadingsChecked,
    ];

    /// Key inside the `adminConsole` object.
    pub fn key(self) -> &'static str {
        match self {
            CompletionFlag::DemoChecked => "demoChecked",
            CompletionFlag::ApplicationCreated => "applicationCreated",
            CompletionFlag::SignInExperienceCustomized => "signInExperienceCustomized",
            CompletionFlag::PasswordlessConfigured => "passwordlessConfigured",
            CompletionFlag::SocialSignInConfigured => "socialSignInConfigured",
            CompletionFlag::FurtherReadingsChecked => "furtherReadingsChecked",
        }
    }
}

/// Partial update of [`AdminConsoleSettings`]; unset fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance_mode: Option<AppearanceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_notice_confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_get_started: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in_experience_customized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwordless_configured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_sign_in_configured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub further_readings_checked: Option<bool>,
}

impl SettingsPatch {
    /// Patch marking a single onboarding step as done.
    pub fn complete(flag: CompletionFlag) -> Self {
        let mut patch = Self::default();
        let slot = match flag {
            CompletionFlag::DemoChecked => &mut patch.demo_checked,
            CompletionFlag::ApplicationCreated => &mut patch.application_created,
            CompletionFlag::SignInExperienceCustomized => &mut patch.sign_in_experience_customized,
            CompletionFlag::PasswordlessConfigured => &mut patch.passwordless_configured,
            CompletionFlag::SocialSignInConfigured => &mut patch.social_sign_in_configured,
            CompletionFlag::FurtherReadingsChecked => &mut patch.further_readings_checked,
        };
        *slot = Some(true);
        patch
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge into a raw `adminConsole` object, key by key.
    pub fn merge_into(&self, object: &mut ArbitraryObject) -> Result<(), SettingsError> {
        let Value::Object(changes) =
            serde_json::to_value(self).map_err(|e| SettingsError::Malformed(e.to_string()))?
        else {
            return Err(SettingsError::Malformed("patch is not an object".to_string()));
        };

        for (key, value) in changes {
            object.insert(key, value);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("settings are unavailable: {0}")]
    Unavailable(String),
    #[error("settings update rejected: {0}")]
    Rejected(String),
    #[error("malformed settings: {0}")]
    Malformed(String),
}

/// Where the console reads and writes its settings.
pub trait SettingsService: Send + Sync {
    /// Latest known snapshot, `None` until one has been loaded.
    fn settings(&self) -> Option<AdminConsoleSettings>;

    /// Apply a partial update.
    fn update_settings(&self, patch: &SettingsPatch) -> Result<(), SettingsError>;
}

/// Settings service backed by an in-process settings row.
#[derive(Debug, Default)]
pub struct InMemorySettingsService {
    row: Mutex<Option<Setting>>,
}

impl InMemorySettingsService {
    /// No row yet: reads return `None`, updates fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the row from an untrusted creation input, checked by the settings guard.
    pub fn seeded(candidate: &Value) -> Result<Self, SettingsError> {
        let input: CreateSetting = validate_create_input(SETTINGS.create_guard(), candidate)
            .map_err(|e| SettingsError::Rejected(e.to_string()))?;
        Ok(Self {
            row: Mutex::new(Some(input.into())),
        })
    }

    pub fn with_setting(setting: Setting) -> Self {
        Self {
            row: Mutex::new(Some(setting)),
        }
    }

    /// Copy of the stored row.
    pub fn row(&self) -> Option<Setting> {
        self.row.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SettingsService for InMemorySettingsService {
    fn settings(&self) -> Option<AdminConsoleSettings> {
        let row = self.row()?;
        let (settings, skipped) = AdminConsoleSettings::from_admin_console_lossy(&row.admin_console);
        if !skipped.is_empty() {
            tracing::warn!(setting_id = %row.id, ?skipped, "ignoring unreadable console settings keys");
        }
        Some(settings)
    }

    fn update_settings(&self, patch: &SettingsPatch) -> Result<(), SettingsError> {
        let mut guard = self
            .row
            .lock()
            .map_err(|_| SettingsError::Unavailable("settings lock poisoned".to_string()))?;
        let row = guard
            .as_mut()
            .ok_or_else(|| SettingsError::Unavailable("no settings row".to_string()))?;

        patch.merge_into(&mut row.admin_console)?;
        tracing::debug!(setting_id = %row.id, ?patch, "console settings updated");
        Ok(())
    }
}
