//! Interface language tags.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Language the console is displayed in (e.g. `en`, `zh-CN`, `pt-PT`).
///
/// Tags are kept as given; comparisons that matter for routing go through
/// [`Language::path_segment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// The fallback language; documentation links omit a locale segment for it.
    pub const DEFAULT: &'static str = "en";

    pub fn new(tag: impl Into<String>) -> DomainResult<Self> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("language tag must not be empty"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::validation(format!(
                "language tag `{trimmed}` contains invalid characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn english() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Lower-cased locale segment for URLs, `None` for the default language.
    pub fn path_segment(&self) -> Option<String> {
        if self.is_default() {
            None
        } else {
            Some(self.0.to_lowercase())
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl ValueObject for Language {}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.0
    }
}

impl core::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_no_path_segment() {
        assert_eq!(Language::english().path_segment(), None);
        assert!(Language::default().is_default());
    }

    #[test]
    fn other_languages_are_lowercased_for_paths() {
        let lang: Language = "zh-CN".parse().unwrap();
        assert_eq!(lang.as_str(), "zh-CN");
        assert_eq!(lang.path_segment().as_deref(), Some("zh-cn"));
    }

    #[test]
    fn rejects_empty_and_malformed_tags() {
        assert!(matches!(Language::new("  "), Err(DomainError::Validation(_))));
        assert!(matches!(Language::new("en/../"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let lang = Language::new("pt-PT").unwrap();
        let json = serde_json::to_string(&lang).unwrap();
        assert_eq!(json, "\"pt-PT\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lang);
        assert!(serde_json::from_str::<Language>("\"\"").is_err());
    }
}
