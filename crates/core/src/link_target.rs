//! Browsing context for links and external navigation.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Browsing context a link opens in. Serialized as the HTML `target` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SameContext,
    /// New tab/window.
    #[serde(rename = "_blank")]
    NewContext,
}

impl ValueObject for LinkTarget {}

impl LinkTarget {
    pub fn as_attr(self) -> &'static str {
        match self {
            LinkTarget::SameContext => "_self",
            LinkTarget::NewContext => "_blank",
        }
    }

    /// Pages opened elsewhere must not get a handle back to the console.
    pub fn needs_opener_isolation(self) -> bool {
        self == LinkTarget::NewContext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_value_matches_html_attribute() {
        for target in [LinkTarget::SameContext, LinkTarget::NewContext] {
            assert_eq!(serde_json::to_value(target).unwrap(), target.as_attr());
        }
        let parsed: LinkTarget = serde_json::from_str("\"_blank\"").unwrap();
        assert_eq!(parsed, LinkTarget::NewContext);
        assert!(parsed.needs_opener_isolation());
        assert!(!LinkTarget::default().needs_opener_isolation());
    }
}
