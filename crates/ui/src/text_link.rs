//! Inline text links.

use serde::Serialize;

use idconsole_core::LinkTarget;

/// Link embedded in running text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLink {
    /// Phrase key of the label.
    pub text: String,
    /// Label as displayed.
    pub label: String,
    pub href: String,
    pub target: LinkTarget,
}

impl TextLink {
    pub fn new(text: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            href: href.into(),
            target: LinkTarget::SameContext,
        }
    }

    pub fn in_new_context(mut self) -> Self {
        self.target = LinkTarget::NewContext;
        self
    }

    pub fn to_html(&self) -> String {
        let rel = if self.target.needs_opener_isolation() {
            " rel=\"noopener noreferrer\""
        } else {
            ""
        };
        format!(
            "<a href=\"{}\" target=\"{}\"{rel}>{}</a>",
            escape_html(&self.href),
            self.target.as_attr(),
            escape_html(&self.label),
        )
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
