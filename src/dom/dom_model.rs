use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Arena-backed document tree
// ============================================================================

/// Handle to a node in a `Document`. Cheap to copy, only meaningful for the
/// document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag: String,
    /// Attribute name -> value. BTreeMap keeps iteration deterministic.
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// Viewport dimensions of the page the document was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// In-memory DOM stand-in. Nodes live in an arena and are addressed by
/// `NodeId`; detached subtrees stay allocated but become unreachable from
/// the root, which is all the capture logic ever observes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Append an element under `parent`. With `parent == None` the element
    /// becomes the document root (only valid once).
    pub fn append_element(
        &mut self,
        parent: Option<NodeId>,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let attrs = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            data: NodeData::Element(ElementData {
                tag: tag.to_lowercase(),
                attributes: attrs,
            }),
        });

        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.root = Some(id),
        }

        id
    }

    /// Append a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            data: NodeData::Text(text.to_string()),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach a subtree from its parent. The nodes stay in the arena but are
    /// no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
        self.nodes[id.0].parent = None;
        if self.root == Some(id) {
            self.root = None;
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).map(|n| &n.data), Some(NodeData::Element(_)))
    }

    /// Lowercase tag name, None for text nodes and stale ids.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => Some(el.tag.as_str()),
            _ => None,
        }
    }

    pub fn is_body(&self, id: NodeId) -> bool {
        self.tag_name(id) == Some("body")
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element(el)) => el.attributes.get(name).map(|v| v.as_str()),
            _ => None,
        }
    }

    /// The `id` attribute, None when absent or empty.
    pub fn id_attr(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "id").filter(|v| !v.is_empty())
    }

    /// Whitespace-split class tokens, in attribute order.
    pub fn class_list(&self, id: NodeId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Parent node when it is an element; the walk helpers stop here at the
    /// ownerless ancestor.
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent?;
        if self.is_element(parent) { Some(parent) } else { None }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Concatenated text of all descendant text nodes, document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(NodeData::Element(_)) => {
                for child in self.children(id).to_vec() {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Number of preceding siblings sharing this element's tag name.
    pub fn preceding_same_tag_siblings(&self, id: NodeId) -> usize {
        let tag = match self.tag_name(id) {
            Some(t) => t.to_string(),
            None => return 0,
        };
        let parent = match self.node(id).and_then(|n| n.parent) {
            Some(p) => p,
            None => return 0,
        };

        self.children(parent)
            .iter()
            .take_while(|c| **c != id)
            .filter(|c| self.tag_name(**c) == Some(tag.as_str()))
            .count()
    }

    /// Count of this element's same-tag siblings under its parent,
    /// including itself. 1 means the element is alone among its tag.
    pub fn same_tag_sibling_count(&self, id: NodeId) -> usize {
        let tag = match self.tag_name(id) {
            Some(t) => t.to_string(),
            None => return 0,
        };
        let parent = match self.node(id).and_then(|n| n.parent) {
            Some(p) => p,
            None => return 1,
        };

        self.children(parent)
            .iter()
            .filter(|c| self.tag_name(**c) == Some(tag.as_str()))
            .count()
    }

    /// 1-based position among same-tag siblings, document order.
    pub fn same_tag_sibling_position(&self, id: NodeId) -> usize {
        self.preceding_same_tag_siblings(id) + 1
    }

    /// Whether `ancestor` contains `node` (inclusive of `ancestor` itself).
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    /// All reachable element ids, depth-first document order.
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_elements(root, &mut out);
        }
        out
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if self.is_element(id) {
            out.push(id);
        }
        for child in self.children(id).to_vec() {
            self.collect_elements(child, out);
        }
    }

    /// First reachable element whose `id` attribute equals `dom_id`.
    pub fn element_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|el| self.id_attr(*el) == Some(dom_id))
    }

    /// First reachable element with the given tag name.
    pub fn element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|el| self.tag_name(*el) == Some(tag))
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }
}
