use serde::{Deserialize, Serialize};

use crate::capture::capture_model::{ChangeEvent, ClickEvent, ClickOutcome};
use crate::capture::recorder::Recorder;
use crate::control::storage::LocatorStore;
use crate::dom::dom_model::{Document, Viewport};
use crate::locator::locator_model::LocatorRecord;
use crate::trace::{logger::TraceLogger, trace::CaptureTraceEvent};

// ============================================================================
// Control surface - command channel between the page core and the shell
// ============================================================================

/// Inbound command from the control surface (the popup toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Command {
    #[serde(rename = "START")]
    Start,
    #[serde(rename = "STOP")]
    Stop,
}

/// Outbound message to the external results consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum OutboundMessage {
    #[serde(rename = "OPEN_LOCATOR_POPUP")]
    OpenLocatorPopup {
        #[serde(rename = "allSeleniumLocators")]
        all_selenium_locators: Vec<LocatorRecord>,
    },
}

/// Receiving end of the outbound channel. The extension shell forwards
/// these to the results window; tests collect them.
pub trait LocatorSink {
    fn deliver(&mut self, message: OutboundMessage);
}

/// Sink that keeps every delivered message, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub messages: Vec<OutboundMessage>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    /// Records from the most recent session handoff.
    pub fn last_session(&self) -> Option<&[LocatorRecord]> {
        self.messages.last().map(|m| match m {
            OutboundMessage::OpenLocatorPopup {
                all_selenium_locators,
            } => all_selenium_locators.as_slice(),
        })
    }
}

impl LocatorSink for CollectingSink {
    fn deliver(&mut self, message: OutboundMessage) {
        self.messages.push(message);
    }
}

/// Thin edge the excluded UI glue talks to: routes START/STOP into the
/// recorder, dispatches page events, and forwards finished sessions to the
/// sink. Session handoff happens on every deactivation, whether the STOP
/// came from the in-page affordance or the external command channel.
pub struct ControlSurface<S: LocatorSink> {
    recorder: Recorder,
    sink: S,
    store: Option<LocatorStore>,
    tracer: TraceLogger,
}

impl<S: LocatorSink> ControlSurface<S> {
    pub fn new(viewport: Viewport, sink: S) -> Self {
        ControlSurface {
            recorder: Recorder::new(viewport),
            sink,
            store: None,
            tracer: TraceLogger::disabled(),
        }
    }

    /// Persist the active flag and finished sessions to `store`.
    pub fn with_store(mut self, store: LocatorStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Parse and handle a raw command message. Unknown shapes are ignored,
    /// matching the tolerant listener the shell expects.
    pub fn handle_raw_command(&mut self, doc: &mut Document, raw: &str) {
        match serde_json::from_str::<Command>(raw) {
            Ok(command) => self.handle_command(doc, command),
            Err(_) => {}
        }
    }

    pub fn handle_command(&mut self, doc: &mut Document, command: Command) {
        match command {
            Command::Start => {
                self.recorder.activate(doc, &self.tracer);
                if let Some(store) = &self.store {
                    store.set_active(true);
                }
            }
            Command::Stop => self.finish(doc),
        }
    }

    /// Route a capture-phase click. A click on the stop affordance finishes
    /// the session, everything else goes through normal capture.
    pub fn dispatch_click(&mut self, doc: &mut Document, event: &mut ClickEvent) -> ClickOutcome {
        let outcome = self.recorder.handle_click(doc, event, &self.tracer);
        if outcome == ClickOutcome::StopRequested {
            self.finish(doc);
        }
        outcome
    }

    /// Route a committed value change to any pending deferred captures.
    pub fn dispatch_change(&mut self, doc: &Document, event: &ChangeEvent) -> usize {
        self.recorder.handle_change(doc, event, &self.tracer)
    }

    /// Close the floating preview panel (its dismiss control).
    pub fn dismiss_preview(&mut self) {
        self.recorder.dismiss_preview();
    }

    /// Deactivate, persist, and hand the session to the consumer.
    fn finish(&mut self, doc: &mut Document) {
        let records = self.recorder.deactivate(doc, &self.tracer);

        if let Some(store) = &self.store {
            store.set_active(false);
        }
        if records.is_empty() {
            return;
        }

        if let Some(store) = &self.store {
            store.save_session(&records);
        }
        self.tracer.log(
            &CaptureTraceEvent::now(0, self.recorder.state(), "session_handoff")
                .with_detail(format!("{} records", records.len())),
        );
        self.sink.deliver(OutboundMessage::OpenLocatorPopup {
            all_selenium_locators: records,
        });
    }
}
