use std::collections::BTreeMap;

use serde::Deserialize;

use crate::dom::dom_model::{Document, NodeId, Viewport};
use crate::dom::error::DomError;

// ============================================================================
// JSON page fixtures
// ============================================================================

/// One node of a serialized page snapshot. `text` is shorthand for a single
/// text child appended before any element children.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNode {
    pub tag: String,

    #[serde(default)]
    pub attrs: BTreeMap<String, String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

/// A page snapshot: title, viewport, and the DOM tree rooted at `dom`.
///
/// Produced by an external extraction step and consumed by the CLI; tests
/// build documents directly instead.
#[derive(Debug, Clone, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub viewport: Viewport,

    pub dom: FixtureNode,
}

impl PageFixture {
    /// Load and parse a fixture file.
    pub fn load(path: &str) -> Result<PageFixture, DomError> {
        let content = std::fs::read_to_string(path).map_err(|e| DomError::FixtureRead {
            path: path.to_string(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| DomError::FixtureParse {
            path: path.to_string(),
            source: e,
        })
    }

    /// Materialize the fixture tree into a `Document`.
    pub fn build(&self) -> Document {
        let mut doc = Document::new();
        build_node(&mut doc, None, &self.dom);
        doc
    }
}

fn build_node(doc: &mut Document, parent: Option<NodeId>, node: &FixtureNode) -> NodeId {
    let attrs: Vec<(&str, &str)> = node
        .attrs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let id = doc.append_element(parent, &node.tag, &attrs);

    if let Some(text) = &node.text {
        doc.append_text(id, text);
    }
    for child in &node.children {
        build_node(doc, Some(id), child);
    }

    id
}
