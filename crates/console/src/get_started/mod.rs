//! "Get Started" onboarding checklist.
//!
//! [`get_started_metadata`] is a pure derivation from the current settings,
//! theme, language and demo-app lookup to the cards shown on the page. Card
//! clicks are returned as [`ItemAction`] values and only run through
//! [`execute_action`].

mod action;
mod memo;

pub use action::{execute_action, ActionContext};
pub use memo::GetStartedMemo;

use idconsole_core::{Language, ValueObject};

use crate::config::ConsoleConfig;
use crate::demo_app::DemoAppLookup;
use crate::settings::{AdminConsoleSettings, CompletionFlag};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetStartedItemId {
    CheckDemo,
    CreateApplication,
    CustomizeSignInExperience,
    ConfigurePasswordless,
    ConfigureSocialSignIn,
    CheckFurtherReadings,
}

impl GetStartedItemId {
    pub fn as_str(self) -> &'static str {
        match self {
            GetStartedItemId::CheckDemo => "checkDemo",
            GetStartedItemId::CreateApplication => "createApplication",
            GetStartedItemId::CustomizeSignInExperience => "customizeSignInExperience",
            GetStartedItemId::ConfigurePasswordless => "configurePasswordless",
            GetStartedItemId::ConfigureSocialSignIn => "configureSocialSignIn",
            GetStartedItemId::CheckFurtherReadings => "checkFurtherReadings",
        }
    }
}

/// Card illustration, in the variant matching the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub name: &'static str,
    pub theme: Theme,
}

impl Icon {
    pub fn file_name(&self) -> String {
        match self.theme {
            Theme::Light => format!("{}.svg", self.name),
            Theme::Dark => format!("{}-dark.svg", self.name),
        }
    }
}

/// What clicking a card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Route inside the console.
    Navigate(&'static str),
    /// Record the step as done, then open `url` in a new browsing context.
    CompleteAndOpen { flag: CompletionFlag, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStartedItem {
    pub id: GetStartedItemId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: Icon,
    pub button_text: &'static str,
    pub is_complete: bool,
    pub is_hidden: bool,
    pub action: ItemAction,
}

/// Everything the checklist depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetStartedInputs {
    pub settings: Option<AdminConsoleSettings>,
    pub theme: Theme,
    pub language: Language,
    pub demo_app: DemoAppLookup,
}

impl ValueObject for GetStartedInputs {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStartedMetadata {
    pub items: Vec<GetStartedItem>,
    pub completed_count: usize,
    pub total_count: usize,
    pub is_loading: bool,
}

enum Target {
    Route(&'static str),
    DemoApp,
    FurtherReadings,
}

struct Card {
    id: GetStartedItemId,
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    button_text: &'static str,
    flag: CompletionFlag,
    target: Target,
}

const CARDS: [Card; 6] = [
    Card {
        id: GetStartedItemId::CheckDemo,
        title: "get_started.card1_title",
        subtitle: "get_started.card1_subtitle",
        icon: "check-demo",
        button_text: "admin_console.general.check_out",
        flag: CompletionFlag::DemoChecked,
        target: Target::DemoApp,
    },
    Card {
        id: GetStartedItemId::CreateApplication,
        title: "get_started.card2_title",
        subtitle: "get_started.card2_subtitle",
        icon: "create-app",
        button_text: "admin_console.general.create",
        flag: CompletionFlag::ApplicationCreated,
        target: Target::Route("/applications/create"),
    },
    Card {
        id: GetStartedItemId::CustomizeSignInExperience,
        title: "get_started.card3_title",
        subtitle: "get_started.card3_subtitle",
        icon: "customize",
        button_text: "admin_console.general.customize",
        flag: CompletionFlag::SignInExperienceCustomized,
        target: Target::Route("/sign-in-experience"),
    },
    Card {
        id: GetStartedItemId::ConfigurePasswordless,
        title: "get_started.card4_title",
        subtitle: "get_started.card4_subtitle",
        icon: "passwordless",
        button_text: "admin_console.general.set_up",
        flag: CompletionFlag::PasswordlessConfigured,
        target: Target::Route("/connectors"),
    },
    Card {
        id: GetStartedItemId::ConfigureSocialSignIn,
        title: "get_started.card5_title",
        subtitle: "get_started.card5_subtitle",
        icon: "one-click",
        button_text: "admin_console.general.add",
        flag: CompletionFlag::SocialSignInConfigured,
        target: Target::Route("/connectors/social"),
    },
    Card {
        id: GetStartedItemId::CheckFurtherReadings,
        title: "get_started.card6_title",
        subtitle: "get_started.card6_subtitle",
        icon: "further-readings",
        button_text: "admin_console.general.check_out",
        flag: CompletionFlag::FurtherReadingsChecked,
        target: Target::FurtherReadings,
    },
];

/// Documentation page for the "further readings" card.
///
/// Non-default languages get a lower-cased locale segment after the site root.
pub fn further_readings_url(docs_base_url: &str, language: &Language) -> String {
    let base = docs_base_url.trim_end_matches('/');
    match language.path_segment() {
        Some(segment) => format!("{base}/{segment}/docs/tutorials/get-started/further-readings"),
        None => format!("{base}/docs/tutorials/get-started/further-readings"),
    }
}

/// Drop hidden cards, keeping order.
pub fn filter_visible(items: Vec<GetStartedItem>) -> Vec<GetStartedItem> {
    items.into_iter().filter(|item| !item.is_hidden).collect()
}

/// Build the checklist for the given inputs.
pub fn get_started_metadata(inputs: &GetStartedInputs, config: &ConsoleConfig) -> GetStartedMetadata {
    let hide_demo = inputs.demo_app.is_hidden();

    let items = CARDS
        .iter()
        .map(|card| {
            let action = match card.target {
                Target::Route(path) => ItemAction::Navigate(path),
                Target::DemoApp => ItemAction::CompleteAndOpen {
                    flag: card.flag,
                    url: config.demo_app_path.clone(),
                },
                Target::FurtherReadings => ItemAction::CompleteAndOpen {
                    flag: card.flag,
                    url: further_readings_url(&config.docs_base_url, &inputs.language),
                },
            };

            GetStartedItem {
                id: card.id,
                title: card.title,
                subtitle: card.subtitle,
                icon: Icon {
                    name: card.icon,
                    theme: inputs.theme,
                },
                button_text: card.button_text,
                is_complete: inputs
                    .settings
                    .as_ref()
                    .is_some_and(|settings| settings.is_complete(card.flag)),
                is_hidden: card.id == GetStartedItemId::CheckDemo && hide_demo,
                action,
            }
        })
        .collect();

    let items = filter_visible(items);
    let completed_count = items.iter().filter(|item| item.is_complete).count();
    let total_count = items.len();
    let is_loading = inputs.demo_app.is_loading();

    tracing::debug!(
        completed_count,
        total_count,
        is_loading,
        hide_demo,
        "get started checklist derived"
    );

    GetStartedMetadata {
        items,
        completed_count,
        total_count,
        is_loading,
    }
}
