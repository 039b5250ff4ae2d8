//! Splice elements into text at every occurrence of a needle.

use serde::Serialize;

/// Piece of mixed content: plain text or an embedded element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node<T> {
    Text(String),
    Element(T),
}

impl<T> Node<T> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&T> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }
}

/// Replace each occurrence of `needle` in `content` with `make(matched, index)`.
///
/// Matching ignores case; `matched` is the text as it appears in `content`.
/// Text around the matches is kept verbatim; empty text pieces are dropped.
/// An empty needle, or one that never occurs, yields the content as one text
/// node.
pub fn replace_with<T>(
    content: &str,
    needle: &str,
    mut make: impl FnMut(&str, usize) -> T,
) -> Vec<Node<T>> {
    if needle.is_empty() {
        return text_only(content);
    }

    let mut nodes = Vec::new();
    let mut rest = content;
    let mut index = 0;

    while let Some((start, end)) = find_ignore_case(rest, needle) {
        if start > 0 {
            nodes.push(Node::Text(rest[..start].to_string()));
        }
        nodes.push(Node::Element(make(&rest[start..end], index)));
        index += 1;
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        nodes.push(Node::Text(rest.to_string()));
    }
    nodes
}

/// Byte range of the leftmost case-insensitive match of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack
        .char_indices()
        .find_map(|(start, _)| match_len(&haystack[start..], needle).map(|len| (start, start + len)))
}

/// Length in bytes of the prefix of `haystack` matching `needle`, if any.
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for expected in needle.chars() {
        let (_, found) = chars.next()?;
        if found != expected && !found.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(end, _)| end))
}

fn text_only<T>(content: &str) -> Vec<Node<T>> {
    if content.is_empty() {
        Vec::new()
    } else {
        vec![Node::Text(content.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(nodes: &[Node<usize>]) -> String {
        nodes
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.clone(),
                Node::Element(i) => format!("[{i}]"),
            })
            .collect()
    }

    #[test]
    fn replaces_every_occurrence_in_order() {
        let nodes = replace_with("a {x} b {x}", "{x}", |_, i| i);
        assert_eq!(render(&nodes), "a [0] b [1]");
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn keeps_text_when_needle_is_absent_or_empty() {
        assert_eq!(
            replace_with("plain", "{x}", |_, i| i),
            vec![Node::Text("plain".to_string())]
        );
        assert_eq!(
            replace_with("plain", "", |_, i| i),
            vec![Node::Text("plain".to_string())]
        );
    }

    #[test]
    fn matching_ignores_case_and_keeps_source_text() {
        let nodes = replace_with("Read the terms of use, then TERMS OF USE again", "Terms of Use", |m, _| {
            m.to_string()
        });
        assert_eq!(
            nodes,
            vec![
                Node::Text("Read the ".to_string()),
                Node::Element("terms of use".to_string()),
                Node::Text(", then ".to_string()),
                Node::Element("TERMS OF USE".to_string()),
                Node::Text(" again".to_string()),
            ]
        );
    }

    #[test]
    fn multibyte_text_is_split_on_char_boundaries() {
        let nodes = replace_with("Ändern: ÄNDERN", "ändern", |m, _| m.to_string());
        assert_eq!(
            nodes,
            vec![
                Node::Element("Ändern".to_string()),
                Node::Text(": ".to_string()),
                Node::Element("ÄNDERN".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_matches_have_no_empty_text() {
        let nodes = replace_with("xx", "x", |m, _| m.len());
        assert_eq!(nodes, vec![Node::Element(1), Node::Element(1)]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: putting the needle back where the elements are restores the input.
            #[test]
            fn replacement_is_lossless(content in "[a-c{}]{0,40}", needle in "[a-c{}]{1,3}") {
                let nodes = replace_with(&content, &needle, |m, _| m.to_string());
                let restored: String = nodes
                    .iter()
                    .map(|node| match node {
                        Node::Text(text) => text.as_str(),
                        Node::Element(m) => m.as_str(),
                    })
                    .collect();
                prop_assert_eq!(restored, content.clone());
                prop_assert_eq!(
                    nodes.iter().filter(|n| n.as_element().is_some()).count(),
                    content.matches(needle.as_str()).count()
                );
            }
        }
    }
}
