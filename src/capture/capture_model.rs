use crate::dom::dom_model::{Document, NodeId};
use crate::locator::locator_model::LocatorRecord;

// ============================================================================
// Capture state machine model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Inactive,
    Active,
}

/// A page click as delivered by the host harness, observed in the capture
/// phase. Suppression flags mirror `preventDefault` / `stopPropagation`:
/// the harness inspects them after dispatch to decide whether the page may
/// react.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target: NodeId,
    pub client_x: f64,
    pub client_y: f64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: NodeId, client_x: f64, client_y: f64) -> Self {
        ClickEvent {
            target,
            client_x,
            client_y,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// A committed value change on a form control, delivered after the user
/// finishes editing (blur/commit).
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub target: NodeId,
    pub value: String,
}

/// What a dispatched click amounted to. `StopRequested` means the stop
/// affordance was activated; the control surface turns that into a
/// deactivation plus handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not captured: inactive recorder, non-element target, or a click
    /// inside the overlay chrome.
    Ignored,
    /// Record appended immediately.
    Captured,
    /// Editable control: record parked until its change event.
    Deferred,
    /// The stop affordance was clicked.
    StopRequested,
}

/// A captured click on an editable control, awaiting its value.
///
/// Deliberately not convertible to a session record except through
/// `finalize`, so a still-pending capture cannot be appended.
#[derive(Debug, Clone)]
pub struct PendingCapture {
    target: NodeId,
    record: LocatorRecord,
}

impl PendingCapture {
    pub fn new(target: NodeId, record: LocatorRecord) -> Self {
        PendingCapture { target, record }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Merge the committed value in and release the finalized record.
    pub fn finalize(self, value: &str) -> LocatorRecord {
        let mut record = self.record;
        record.value = Some(value.to_string());
        record
    }
}

/// Whether a click on this element defers capture until a change event.
///
/// Text-entry controls and selects qualify; button-like input types do not,
/// their value never changes in response to the click.
pub fn is_editable_control(doc: &Document, node: NodeId) -> bool {
    match doc.tag_name(node) {
        Some("textarea") | Some("select") => true,
        Some("input") => !matches!(
            doc.attribute(node, "type"),
            Some("submit") | Some("button") | Some("reset") | Some("image") | Some("hidden")
        ),
        _ => false,
    }
}
