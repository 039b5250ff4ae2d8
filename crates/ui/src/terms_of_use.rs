//! Terms-of-use confirmation used by the sign-in flows.

use idconsole_core::Translator;

use crate::confirm_modal::{ConfirmModal, ModalContent};
use crate::string_replace::replace_with;
use crate::text_link::TextLink;

pub const TERMS_OF_USE_KEY: &str = "main_flow.description.terms_of_use";
pub const AGREE_WITH_TERMS_MODAL_KEY: &str = "main_flow.description.agree_with_terms_modal";

/// Replace every `placeholder` in `template`, ignoring case, with a link to
/// `url` labelled `label`, opening in a new browsing context.
pub fn embed_link(template: &str, placeholder: &str, url: &str, label: &str) -> ModalContent {
    ModalContent(replace_with(template, placeholder, |_, _| {
        TextLink::new(TERMS_OF_USE_KEY, label, url).in_new_context()
    }))
}

/// Props of the terms-of-use modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermsOfUseModal {
    pub is_open: bool,
    pub terms_url: String,
}

impl TermsOfUseModal {
    pub fn new(terms_url: impl Into<String>) -> Self {
        Self {
            is_open: false,
            terms_url: terms_url.into(),
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Localized body: the agreement sentence with the terms label linked.
    pub fn content(&self, translator: &dyn Translator) -> ModalContent {
        let terms = translator.t(TERMS_OF_USE_KEY, &[]);
        let sentence = translator.t(AGREE_WITH_TERMS_MODAL_KEY, &[("terms", terms.as_str())]);
        embed_link(&sentence, &terms, &self.terms_url, &terms)
    }

    pub fn render<'a>(
        &self,
        translator: &dyn Translator,
        on_confirm: impl FnMut() + 'a,
        on_close: impl FnMut() + 'a,
    ) -> ConfirmModal<'a> {
        ConfirmModal::new(self.is_open, self.content(translator), on_confirm, on_close)
    }
}
