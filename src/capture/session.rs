use crate::locator::locator_model::LocatorRecord;

// ============================================================================
// Capture session store
// ============================================================================

/// Ordered, append-only sequence of finalized locator records for one
/// recording session. No deduplication: a session is a literal sequence of
/// user actions, repeated clicks produce repeated records.
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    records: Vec<LocatorRecord>,
}

impl CaptureSession {
    pub fn new() -> Self {
        CaptureSession::default()
    }

    pub fn append(&mut self, record: LocatorRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LocatorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand the accumulated records off and reset for the next session.
    pub fn snapshot_and_clear(&mut self) -> Vec<LocatorRecord> {
        std::mem::take(&mut self.records)
    }
}
