use crate::dom::dom_model::{Document, NodeId};

// ============================================================================
// CSS selector path derivation
// ============================================================================

/// CSS path from just below `body` down to `node`, segments joined with
/// `" > "`.
///
/// Walks upward and stops before `body` (never encoded). An `id` is treated
/// as a unique anchor: the segment becomes `tag#id` and the walk stops
/// there. Without an id the segment uses the first class name, and a
/// `:nth-of-type(k)` suffix disambiguates elements with same-tag siblings.
/// Non-element input yields an empty string.
pub fn css_selector(doc: &Document, node: NodeId) -> String {
    if !doc.is_element(node) {
        return String::new();
    }

    let mut path = Vec::new();
    let mut current = Some(node);

    while let Some(el) = current {
        if !doc.is_element(el) || doc.is_body(el) {
            break;
        }

        let mut selector = doc.tag_name(el).unwrap_or_default().to_string();

        if let Some(id) = doc.id_attr(el) {
            selector.push('#');
            selector.push_str(id);
            path.push(selector);
            break;
        }

        if let Some(first_class) = doc.class_list(el).first() {
            selector.push('.');
            selector.push_str(first_class);
        }

        if doc.same_tag_sibling_count(el) > 1 {
            selector.push_str(&format!(":nth-of-type({})", doc.same_tag_sibling_position(el)));
        }

        path.push(selector);
        current = doc.parent_element(el);
    }

    path.reverse();
    path.join(" > ")
}
