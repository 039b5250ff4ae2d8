//! Confirmation dialog shell.
//!
//! Visibility is owned by the caller; the modal only forwards confirm and
//! close to the callbacks it was given.

use serde::Serialize;

use crate::string_replace::Node;
use crate::text_link::{escape_html, TextLink};

/// Body of a modal: text with embedded links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ModalContent(pub Vec<Node<TextLink>>);

impl ModalContent {
    pub fn nodes(&self) -> &[Node<TextLink>] {
        &self.0
    }

    pub fn links(&self) -> impl Iterator<Item = &TextLink> {
        self.0.iter().filter_map(Node::as_element)
    }

    /// Text as read, with link labels inline.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.as_str(),
                Node::Element(link) => link.label.as_str(),
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.0
            .iter()
            .map(|node| match node {
                Node::Text(text) => escape_html(text),
                Node::Element(link) => link.to_html(),
            })
            .collect()
    }
}

pub struct ConfirmModal<'a> {
    pub is_open: bool,
    pub content: ModalContent,
    on_confirm: Box<dyn FnMut() + 'a>,
    on_close: Box<dyn FnMut() + 'a>,
}

impl<'a> ConfirmModal<'a> {
    pub fn new(
        is_open: bool,
        content: ModalContent,
        on_confirm: impl FnMut() + 'a,
        on_close: impl FnMut() + 'a,
    ) -> Self {
        Self {
            is_open,
            content,
            on_confirm: Box::new(on_confirm),
            on_close: Box::new(on_close),
        }
    }

    pub fn confirm(&mut self) {
        tracing::debug!(is_open = self.is_open, "modal confirmed");
        (self.on_confirm)();
    }

    pub fn close(&mut self) {
        tracing::debug!(is_open = self.is_open, "modal dismissed");
        (self.on_close)();
    }
}

impl core::fmt::Debug for ConfirmModal<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfirmModal")
            .field("is_open", &self.is_open)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
