//! `idconsole-console` — admin console view models.
//!
//! Pure derivations over settings and lookup state, plus the collaborator
//! traits (settings, applications API, navigation) they act through. No
//! rendering and no HTTP live here.

pub mod config;
pub mod demo_app;
pub mod get_started;
pub mod navigation;
pub mod settings;
pub mod theme;

pub use config::{ConfigError, ConsoleConfig};
pub use demo_app::{
    should_retry_on_error, Application, ApplicationClient, DemoAppLoader, DemoAppLookup,
    RequestError, DEMO_APP_APPLICATION_ID,
};
pub use get_started::{
    execute_action, get_started_metadata, ActionContext, GetStartedInputs, GetStartedItem,
    GetStartedItemId, GetStartedMemo, GetStartedMetadata, ItemAction,
};
pub use navigation::{LinkOpener, LinkTarget, Navigator};
pub use settings::{
    AdminConsoleSettings, CompletionFlag, InMemorySettingsService, SettingsError, SettingsPatch,
    SettingsService,
};
pub use theme::{AppearanceMode, Theme};
