//! Localization seam.
//!
//! Views ask a [`Translator`] for phrases by dotted key. Interpolation follows
//! the `{{name}}` convention used by the phrase bundles.

use std::collections::HashMap;

use crate::language::Language;

/// Looks up localized phrases.
pub trait Translator {
    /// Translate `key`, substituting `{{name}}` placeholders from `params`.
    ///
    /// Unknown keys resolve to the key itself.
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Language phrases are currently resolved in.
    fn language(&self) -> &Language;
}

/// In-memory phrase table for a single language.
#[derive(Debug, Clone, Default)]
pub struct StaticPhrases {
    language: Language,
    phrases: HashMap<String, String>,
}

impl StaticPhrases {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            phrases: HashMap::new(),
        }
    }

    pub fn with_phrase(mut self, key: impl Into<String>, phrase: impl Into<String>) -> Self {
        self.phrases.insert(key.into(), phrase.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, phrase: impl Into<String>) {
        self.phrases.insert(key.into(), phrase.into());
    }
}

impl Translator for StaticPhrases {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.phrases.get(key) {
            Some(phrase) => interpolate(phrase, params),
            None => {
                tracing::debug!(key, language = %self.language, "missing phrase");
                key.to_string()
            }
        }
    }

    fn language(&self) -> &Language {
        &self.language
    }
}

/// Replace every `{{name}}` in `phrase` with the matching param.
///
/// Placeholders without a param are left untouched.
pub fn interpolate(phrase: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut rest = phrase;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after[..end].trim();
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_known_params() {
        assert_eq!(
            interpolate("I agree with {{terms}}.", &[("terms", "Terms of Use")]),
            "I agree with Terms of Use."
        );
        assert_eq!(interpolate("{{ a }}-{{b}}", &[("a", "1"), ("b", "2")]), "1-2");
    }

    #[test]
    fn leaves_unknown_and_unterminated_placeholders() {
        assert_eq!(interpolate("hi {{name}}", &[]), "hi {{name}}");
        assert_eq!(interpolate("hi {{name", &[("name", "x")]), "hi {{name");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let phrases = StaticPhrases::new(Language::english()).with_phrase("a.b", "Hello");
        assert_eq!(phrases.t("a.b", &[]), "Hello");
        assert_eq!(phrases.t("a.c", &[]), "a.c");
        assert!(phrases.language().is_default());
    }
}
