use crate::dom::dom_model::{Document, NodeId};

// ============================================================================
// XPath derivation - positional and attribute-preferential forms
// ============================================================================

/// Attribute priority for `smart_xpath`, first match wins. Stable semantic
/// attributes rank above tree position; `class` is deliberately last since a
/// full class string is an unreliable predicate.
pub const PREFERRED_ATTRIBUTES: [&str; 11] = [
    "id",
    "name",
    "type",
    "placeholder",
    "aria-label",
    "role",
    "title",
    "alt",
    "data-testid",
    "data-test",
    "class",
];

/// Index-based XPath from the document root to `node`, one `tag[index]`
/// segment per level. Index is 1-based among preceding same-tag siblings.
pub fn positional_xpath(doc: &Document, node: NodeId) -> String {
    let mut parts = Vec::new();
    let mut current = Some(node);

    while let Some(el) = current {
        if !doc.is_element(el) {
            break;
        }
        let index = doc.preceding_same_tag_siblings(el) + 1;
        let tag = doc.tag_name(el).unwrap_or_default();
        parts.push(format!("{}[{}]", tag, index));
        current = doc.parent_element(el);
    }

    parts.reverse();
    format!("/{}", parts.join("/"))
}

/// Attribute-preferential XPath using the default priority list.
pub fn smart_xpath(doc: &Document, node: NodeId) -> String {
    smart_xpath_with(doc, node, &PREFERRED_ATTRIBUTES)
}

/// Attribute-preferential XPath over a caller-supplied priority list.
///
/// For the first listed attribute present with a non-empty value:
/// - `class` yields `//tag[contains(@class, "first-token")]`
/// - anything else yields an exact predicate `//tag[@attr="value"]`
///
/// Falls back to the positional XPath when none match. Non-element input
/// yields an empty string.
pub fn smart_xpath_with(doc: &Document, node: NodeId, preferred: &[&str]) -> String {
    if !doc.is_element(node) {
        return String::new();
    }

    let tag = doc.tag_name(node).unwrap_or_default();

    for attr in preferred {
        let value = match doc.attribute(node, attr) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        if *attr == "class" {
            let first_class = value.split_whitespace().next().unwrap_or_default();
            return format!("//{}[contains(@class, \"{}\")]", tag, first_class);
        }
        return format!("//{}[@{}=\"{}\"]", tag, attr, value);
    }

    positional_xpath(doc, node)
}
