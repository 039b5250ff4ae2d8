use crate::navigation::{LinkOpener, LinkTarget, Navigator};
use crate::settings::{SettingsPatch, SettingsService};

use super::{GetStartedItem, ItemAction};

/// Collaborators a card click may touch.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    pub navigator: &'a dyn Navigator,
    pub links: &'a dyn LinkOpener,
    pub settings: &'a dyn SettingsService,
}

/// Run a card action.
///
/// The settings update is fire-and-forget: a failure is logged and the link is
/// still opened. The next settings read is the source of truth.
pub fn execute_action(action: &ItemAction, ctx: &ActionContext<'_>) {
    match action {
        ItemAction::Navigate(path) => {
            tracing::info!(path, "navigating from get started");
            ctx.navigator.navigate(path);
        }
        ItemAction::CompleteAndOpen { flag, url } => {
            if let Err(err) = ctx.settings.update_settings(&SettingsPatch::complete(*flag)) {
                tracing::warn!(flag = flag.key(), error = %err, "failed to record onboarding step");
            }
            tracing::info!(url = %url, "opening external resource from get started");
            ctx.links.open(url, LinkTarget::NewContext);
        }
    }
}

impl GetStartedItem {
    pub fn click(&self, ctx: &ActionContext<'_>) {
        execute_action(&self.action, ctx);
    }
}
