use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{Document, NodeId};
use crate::locator::css::css_selector;
use crate::locator::xpath::smart_xpath;

// ============================================================================
// Locator record - the unit handed to automation script authors
// ============================================================================

/// Event type stamped on records produced by click capture.
pub const CLICK_EVENT: &str = "click";

/// Selenium-style locator set for one captured element.
///
/// Field names follow the wire shape consumed by the results renderer
/// (`tagName`, `cssSelector`, `xPath`, ...). `value` stays `None` until a
/// deferred capture finalizes it, and permanently for non-editable
/// elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorRecord {
    pub tag_name: String,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub name: Option<String>,
    pub link_text: Option<String>,
    pub partial_link_text: Option<String>,
    pub css_selector: String,
    #[serde(rename = "xPath")]
    pub xpath: String,
    pub event_name: String,
    pub value: Option<String>,
}

impl LocatorRecord {
    /// Build the locator fields for an element as observed at click time.
    /// Returns None for non-element nodes.
    pub fn for_element(doc: &Document, node: NodeId) -> Option<LocatorRecord> {
        if !doc.is_element(node) {
            return None;
        }

        let tag = doc.tag_name(node)?.to_string();
        let text = doc.text_content(node).trim().to_string();

        let link_text = if tag == "a" && !text.is_empty() {
            Some(text.clone())
        } else {
            None
        };
        let partial_link_text = if tag == "a" {
            text.split_whitespace().next().map(|t| t.to_string())
        } else {
            None
        };

        Some(LocatorRecord {
            xpath: smart_xpath(doc, node),
            css_selector: css_selector(doc, node),
            id: doc.id_attr(node).map(|v| v.to_string()),
            class_name: doc
                .attribute(node, "class")
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string()),
            name: doc
                .attribute(node, "name")
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string()),
            tag_name: tag,
            link_text,
            partial_link_text,
            event_name: CLICK_EVENT.to_string(),
            value: None,
        })
    }

    /// Non-null locator fields in declaration order, as `(label, value)`
    /// pairs. This is the list shown in the floating preview panel and the
    /// Locators column of the results table; `eventName` and `value` are
    /// rendered separately.
    pub fn preview_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        fields.push(("tagName", self.tag_name.clone()));
        if let Some(id) = &self.id {
            fields.push(("id", id.clone()));
        }
        if let Some(class_name) = &self.class_name {
            fields.push(("className", class_name.clone()));
        }
        if let Some(name) = &self.name {
            fields.push(("name", name.clone()));
        }
        if let Some(link_text) = &self.link_text {
            fields.push(("linkText", link_text.clone()));
        }
        if let Some(partial) = &self.partial_link_text {
            if !partial.is_empty() {
                fields.push(("partialLinkText", partial.clone()));
            }
        }
        if !self.css_selector.is_empty() {
            fields.push(("cssSelector", self.css_selector.clone()));
        }
        if !self.xpath.is_empty() {
            fields.push(("xPath", self.xpath.clone()));
        }

        fields
    }
}
