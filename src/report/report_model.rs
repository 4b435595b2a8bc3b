use serde::{Deserialize, Serialize};

use crate::locator::locator_model::LocatorRecord;

// ============================================================================
// Session report - what the results window renders
// ============================================================================

/// A finished capture session prepared for rendering.
///
/// Built from the record list handed over at deactivation. Consumed by the
/// console and HTML renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Title shown above the table
    pub title: String,

    /// Number of captured records
    pub total: usize,

    /// Records in finalization order
    pub records: Vec<LocatorRecord>,
}

impl SessionReport {
    pub fn from_records(title: &str, records: Vec<LocatorRecord>) -> Self {
        Self {
            title: title.to_string(),
            total: records.len(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 1-based row number, zero-padded to two digits.
pub fn row_number(index: usize) -> String {
    format!("{:02}", index + 1)
}
