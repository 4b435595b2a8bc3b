use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::capture::capture_model::CaptureState;
use crate::dom::dom_model::{Document, NodeId};
use crate::locator::xpath::positional_xpath;

#[derive(Debug, Serialize)]
pub struct CaptureTraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub recorder_state: String,
    pub event: String,

    pub element: Option<String>,
    pub xpath: Option<String>,
    pub detail: Option<String>,
}

impl CaptureTraceEvent {
    pub fn now(step: u64, state: CaptureState, event: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            step,
            recorder_state: format!("{:?}", state),
            event: event.to_string(),
            element: None,
            xpath: None,
            detail: None,
        }
    }

    pub fn with_element(mut self, fingerprint: String) -> Self {
        self.element = Some(fingerprint);
        self
    }

    pub fn with_xpath(mut self, xpath: impl ToString) -> Self {
        self.xpath = Some(xpath.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Stable identity for a captured element within a trace: SHA-1 over the
/// tag name and positional path, so re-runs over the same fixture produce
/// matching fingerprints.
pub fn element_fingerprint(doc: &Document, node: NodeId) -> String {
    use sha1::{Digest, Sha1};

    let tag = doc.tag_name(node).unwrap_or_default();
    let path = positional_xpath(doc, node);

    let mut hasher = Sha1::new();
    hasher.update(tag.as_bytes());
    hasher.update(path.as_bytes());
    format!("{:x}", hasher.finalize())
}
