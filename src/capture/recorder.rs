use crate::capture::capture_model::{
    CaptureState, ChangeEvent, ClickEvent, ClickOutcome, PendingCapture, is_editable_control,
};
use crate::capture::overlay::{PreviewPanel, StopBanner};
use crate::capture::session::CaptureSession;
use crate::dom::dom_model::{Document, Viewport};
use crate::locator::locator_model::LocatorRecord;
use crate::trace::{
    logger::TraceLogger,
    trace::{CaptureTraceEvent, element_fingerprint},
};

// ============================================================================
// Capture state machine
// ============================================================================

/// Per-page recorder: owns the capture state, the session buffer, pending
/// deferred captures, and the in-page affordances. One instance per page
/// context; all event handling is serialized by the host event loop.
pub struct Recorder {
    state: CaptureState,
    session: CaptureSession,
    pending: Vec<PendingCapture>,
    banner: Option<StopBanner>,
    preview: Option<PreviewPanel>,
    viewport: Viewport,
    step: u64,
}

impl Recorder {
    pub fn new(viewport: Viewport) -> Recorder {
        Recorder {
            state: CaptureState::Inactive,
            session: CaptureSession::new(),
            pending: Vec::new(),
            banner: None,
            preview: None,
            viewport,
            step: 0,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == CaptureState::Active
    }

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The floating preview for the most recent capture, if not dismissed.
    pub fn preview(&self) -> Option<&PreviewPanel> {
        self.preview.as_ref()
    }

    /// Close the floating preview (the panel's dismiss control).
    pub fn dismiss_preview(&mut self) {
        self.preview = None;
    }

    /// START: begin a fresh session and install the capture affordances.
    /// Activating an already-active recorder is a no-op.
    pub fn activate(&mut self, doc: &mut Document, tracer: &TraceLogger) {
        if self.is_active() {
            return;
        }

        self.session = CaptureSession::new();
        self.banner = StopBanner::mount(doc);
        self.state = CaptureState::Active;

        tracer.log(&self.next_trace("activated"));
    }

    /// STOP: remove the affordances and return the session snapshot.
    ///
    /// Pending deferred captures are left wired: a change event that was
    /// already in flight may still finalize after deactivation (one-shot
    /// listeners are not explicitly cancelled).
    pub fn deactivate(&mut self, doc: &mut Document, tracer: &TraceLogger) -> Vec<LocatorRecord> {
        if let Some(banner) = self.banner.take() {
            banner.unmount(doc);
        }
        self.preview = None;
        self.state = CaptureState::Inactive;

        let records = self.session.snapshot_and_clear();
        tracer.log(
            &self
                .next_trace("deactivated")
                .with_detail(format!("{} records", records.len())),
        );
        records
    }

    /// Handle one click in the capture phase. Only meaningful while Active.
    pub fn handle_click(
        &mut self,
        doc: &Document,
        event: &mut ClickEvent,
        tracer: &TraceLogger,
    ) -> ClickOutcome {
        if !self.is_active() {
            return ClickOutcome::Ignored;
        }

        let target = event.target;

        // Never capture the recorder's own chrome.
        if let Some(banner) = &self.banner {
            if banner.contains(doc, target) {
                if banner.is_stop_trigger(doc, target) {
                    return ClickOutcome::StopRequested;
                }
                return ClickOutcome::Ignored;
            }
        }

        if !doc.is_element(target) {
            return ClickOutcome::Ignored;
        }

        // The page must not react to a capture click.
        event.prevent_default();
        event.stop_propagation();

        let record = match LocatorRecord::for_element(doc, target) {
            Some(r) => r,
            None => return ClickOutcome::Ignored,
        };

        self.preview = Some(PreviewPanel::for_capture(
            &record,
            target,
            event.client_x,
            event.client_y,
            &self.viewport,
        ));

        let fingerprint = element_fingerprint(doc, target);
        let xpath = record.xpath.clone();

        if is_editable_control(doc, target) {
            // Value at click time would be empty or stale. Park the record
            // until the control's change event commits a value.
            self.pending.push(PendingCapture::new(target, record));
            tracer.log(
                &self
                    .next_trace("capture_deferred")
                    .with_element(fingerprint)
                    .with_xpath(xpath),
            );
            ClickOutcome::Deferred
        } else {
            self.session.append(record);
            tracer.log(
                &self
                    .next_trace("click_captured")
                    .with_element(fingerprint)
                    .with_xpath(xpath),
            );
            ClickOutcome::Captured
        }
    }

    /// Handle a committed value change. Finalizes every pending capture for
    /// the changed control (one per earlier click) and appends them in
    /// click order. Runs regardless of state so a change already in flight
    /// at STOP still lands.
    pub fn handle_change(
        &mut self,
        doc: &Document,
        event: &ChangeEvent,
        tracer: &TraceLogger,
    ) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let (matched, remaining): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|p| p.target() == event.target);
        self.pending = remaining;

        let finalized = matched.len();
        for capture in matched {
            let record = capture.finalize(&event.value);
            tracer.log(
                &self
                    .next_trace("capture_finalized")
                    .with_element(element_fingerprint(doc, event.target))
                    .with_xpath(&record.xpath),
            );
            self.session.append(record);
        }

        finalized
    }

    fn next_trace(&mut self, event: &str) -> CaptureTraceEvent {
        let trace = CaptureTraceEvent::now(self.step, self.state, event);
        self.step += 1;
        trace
    }
}
