//! `idconsole-core` — shared building blocks for the console crates.
//!
//! This crate contains **pure** primitives (no IO, no rendering).

pub mod error;
pub mod i18n;
pub mod language;
pub mod link_target;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use i18n::{StaticPhrases, Translator};
pub use language::Language;
pub use link_target::LinkTarget;
pub use value_object::ValueObject;
