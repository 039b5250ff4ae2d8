//! `idconsole-ui` — shared view models for the embeddable sign-in flows.
//!
//! Components here produce renderable content (text and link nodes) and
//! forward user intent to caller-supplied callbacks; they hold no state of
//! their own.

pub mod confirm_modal;
pub mod string_replace;
pub mod terms_of_use;
pub mod text_link;

pub use confirm_modal::{ConfirmModal, ModalContent};
pub use string_replace::{replace_with, Node};
pub use terms_of_use::{embed_link, TermsOfUseModal};
pub use idconsole_core::LinkTarget;
pub use text_link::TextLink;
