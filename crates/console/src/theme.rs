//! Appearance preferences.

use serde::{Deserialize, Serialize};

use idconsole_core::ValueObject;

/// Appearance the user picked in the console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    #[serde(rename = "system")]
    SyncWithSystem,
    Light,
    Dark,
}

impl AppearanceMode {
    /// Concrete theme, following the OS preference for `SyncWithSystem`.
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            AppearanceMode::Light => Theme::Light,
            AppearanceMode::Dark => Theme::Dark,
            AppearanceMode::SyncWithSystem if system_prefers_dark => Theme::Dark,
            AppearanceMode::SyncWithSystem => Theme::Light,
        }
    }
}

/// Theme actually in effect. Only selects asset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl ValueObject for Theme {}
