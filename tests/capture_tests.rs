use locator_recorder::capture::capture_model::{
    CaptureState, ChangeEvent, ClickEvent, ClickOutcome, is_editable_control,
};
use locator_recorder::capture::overlay::{
    PANEL_HEIGHT, PANEL_WIDTH, STOP_BANNER_ID, STOP_BUTTON_ID, panel_position,
};
use locator_recorder::capture::recorder::Recorder;
use locator_recorder::trace::logger::TraceLogger;

use crate::common::fixtures::{login_page, viewport};

mod common;

fn tracer() -> TraceLogger {
    TraceLogger::disabled()
}

// ============================================================================
// Activation lifecycle
// ============================================================================

#[test]
fn clicks_are_ignored_while_inactive() {
    let page = login_page();
    let mut recorder = Recorder::new(viewport());

    let mut event = ClickEvent::new(page.submit_button, 10.0, 10.0);
    let outcome = recorder.handle_click(&page.doc, &mut event, &tracer());

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(!event.default_prevented(), "Inactive recorder must not touch the event");
    assert_eq!(recorder.state(), CaptureState::Inactive);
}

#[test]
fn activation_mounts_the_stop_banner() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());

    assert!(page.doc.element_by_dom_id(STOP_BANNER_ID).is_none());

    recorder.activate(&mut page.doc, &tracer());
    assert!(recorder.is_active());
    assert!(
        page.doc.element_by_dom_id(STOP_BANNER_ID).is_some(),
        "Stop affordance appears on the page while recording"
    );

    recorder.deactivate(&mut page.doc, &tracer());
    assert!(
        page.doc.element_by_dom_id(STOP_BANNER_ID).is_none(),
        "Stop affordance is removed on deactivation"
    );
}

#[test]
fn reactivation_starts_a_fresh_session() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());

    recorder.activate(&mut page.doc, &tracer());
    let mut event = ClickEvent::new(page.submit_button, 0.0, 0.0);
    recorder.handle_click(&page.doc, &mut event, &tracer());
    assert_eq!(recorder.session().len(), 1);

    let records = recorder.deactivate(&mut page.doc, &tracer());
    assert_eq!(records.len(), 1, "Deactivation hands back the snapshot");

    recorder.activate(&mut page.doc, &tracer());
    assert!(recorder.session().is_empty(), "New activation starts empty");
}

// ============================================================================
// Click capture
// ============================================================================

#[test]
fn non_editable_click_appends_immediately_and_suppresses_the_event() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let mut event = ClickEvent::new(page.submit_button, 40.0, 60.0);
    let outcome = recorder.handle_click(&page.doc, &mut event, &tracer());

    assert_eq!(outcome, ClickOutcome::Captured);
    assert!(event.default_prevented(), "Page must not react to a capture click");
    assert!(event.propagation_stopped());
    assert_eq!(recorder.session().len(), 1);

    let record = &recorder.session().records()[0];
    assert_eq!(record.tag_name, "button");
    assert_eq!(record.event_name, "click");
    assert_eq!(record.value, None, "Non-editable captures never carry a value");
}

#[test]
fn repeated_clicks_append_repeated_records() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    for _ in 0..3 {
        let mut event = ClickEvent::new(page.home_link, 0.0, 0.0);
        recorder.handle_click(&page.doc, &mut event, &tracer());
    }

    assert_eq!(recorder.session().len(), 3, "No deduplication across clicks");
}

#[test]
fn text_node_clicks_are_skipped() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let mut event = ClickEvent::new(page.text_node, 0.0, 0.0);
    let outcome = recorder.handle_click(&page.doc, &mut event, &tracer());

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(recorder.session().is_empty());
}

// ============================================================================
// Stop affordance guard
// ============================================================================

#[test]
fn banner_clicks_are_never_captured() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let banner = page.doc.element_by_dom_id(STOP_BANNER_ID).unwrap();
    let mut event = ClickEvent::new(banner, 0.0, 0.0);
    assert_eq!(
        recorder.handle_click(&page.doc, &mut event, &tracer()),
        ClickOutcome::Ignored,
        "Clicking the banner chrome is not a capture"
    );

    let button = page.doc.element_by_dom_id(STOP_BUTTON_ID).unwrap();
    let mut event = ClickEvent::new(button, 0.0, 0.0);
    assert_eq!(
        recorder.handle_click(&page.doc, &mut event, &tracer()),
        ClickOutcome::StopRequested,
        "The stop button requests deactivation"
    );

    assert!(recorder.session().is_empty(), "No banner click produced a record");
}

// ============================================================================
// Deferred value capture
// ============================================================================

#[test]
fn editable_click_defers_until_change() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let mut event = ClickEvent::new(page.user_input, 0.0, 0.0);
    let outcome = recorder.handle_click(&page.doc, &mut event, &tracer());

    assert_eq!(outcome, ClickOutcome::Deferred);
    assert!(recorder.session().is_empty(), "Pending captures are not in the session");
    assert_eq!(recorder.pending_count(), 1);

    let finalized = recorder.handle_change(
        &page.doc,
        &ChangeEvent {
            target: page.user_input,
            value: "alice".to_string(),
        },
        &tracer(),
    );

    assert_eq!(finalized, 1);
    assert_eq!(recorder.session().len(), 1);

    let record = &recorder.session().records()[0];
    assert_eq!(record.id.as_deref(), Some("user"));
    assert_eq!(record.name.as_deref(), Some("username"));
    assert_eq!(record.xpath, "//input[@id=\"user\"]");
    assert_eq!(record.value.as_deref(), Some("alice"));
}

#[test]
fn change_listener_is_one_shot() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let mut event = ClickEvent::new(page.user_input, 0.0, 0.0);
    recorder.handle_click(&page.doc, &mut event, &tracer());

    let change = ChangeEvent {
        target: page.user_input,
        value: "alice".to_string(),
    };
    assert_eq!(recorder.handle_change(&page.doc, &change, &tracer()), 1);
    assert_eq!(
        recorder.handle_change(&page.doc, &change, &tracer()),
        0,
        "A second change must not append again"
    );
    assert_eq!(recorder.session().len(), 1, "Exactly one append per qualifying click");
}

#[test]
fn each_click_gets_its_own_pending_capture() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    for _ in 0..2 {
        let mut event = ClickEvent::new(page.user_input, 0.0, 0.0);
        recorder.handle_click(&page.doc, &mut event, &tracer());
    }
    assert_eq!(recorder.pending_count(), 2);

    let finalized = recorder.handle_change(
        &page.doc,
        &ChangeEvent {
            target: page.user_input,
            value: "bob".to_string(),
        },
        &tracer(),
    );

    assert_eq!(finalized, 2, "One record per earlier click");
    assert_eq!(recorder.session().len(), 2);
}

#[test]
fn session_order_is_finalization_order() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    // Click input A, then button B, then finish typing in A.
    let mut click_a = ClickEvent::new(page.user_input, 0.0, 0.0);
    recorder.handle_click(&page.doc, &mut click_a, &tracer());
    let mut click_b = ClickEvent::new(page.submit_button, 0.0, 0.0);
    recorder.handle_click(&page.doc, &mut click_b, &tracer());
    recorder.handle_change(
        &page.doc,
        &ChangeEvent {
            target: page.user_input,
            value: "late".to_string(),
        },
        &tracer(),
    );

    let records = recorder.session().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].tag_name, "button", "B finalized before A");
    assert_eq!(records[1].tag_name, "input");
    assert_eq!(records[1].value.as_deref(), Some("late"));
}

#[test]
fn change_without_pending_capture_is_ignored() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let finalized = recorder.handle_change(
        &page.doc,
        &ChangeEvent {
            target: page.user_input,
            value: "unprompted".to_string(),
        },
        &tracer(),
    );

    assert_eq!(finalized, 0);
    assert!(recorder.session().is_empty());
}

#[test]
fn pending_capture_survives_deactivation() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    let mut event = ClickEvent::new(page.user_input, 0.0, 0.0);
    recorder.handle_click(&page.doc, &mut event, &tracer());

    let records = recorder.deactivate(&mut page.doc, &tracer());
    assert!(records.is_empty(), "Still-pending capture is not in the handoff");
    assert_eq!(recorder.pending_count(), 1, "STOP does not cancel the wired listener");

    // The in-flight change still lands, in the next session buffer.
    let finalized = recorder.handle_change(
        &page.doc,
        &ChangeEvent {
            target: page.user_input,
            value: "after-stop".to_string(),
        },
        &tracer(),
    );
    assert_eq!(finalized, 1);
    assert_eq!(recorder.session().len(), 1);
}

// ============================================================================
// Editable-control classification
// ============================================================================

#[test]
fn editable_control_classification() {
    let mut page = login_page();

    assert!(is_editable_control(&page.doc, page.user_input), "untyped input");
    assert!(is_editable_control(&page.doc, page.password_input));
    assert!(is_editable_control(&page.doc, page.role_select));
    assert!(!is_editable_control(&page.doc, page.submit_button), "button tag");
    assert!(!is_editable_control(&page.doc, page.home_link));

    let body = page.body;
    let submit_input = page
        .doc
        .append_element(Some(body), "input", &[("type", "submit")]);
    let textarea = page.doc.append_element(Some(body), "textarea", &[]);
    assert!(!is_editable_control(&page.doc, submit_input), "submit input is button-like");
    assert!(is_editable_control(&page.doc, textarea));
}

// ============================================================================
// Floating preview panel
// ============================================================================

#[test]
fn preview_tracks_the_last_capture() {
    let mut page = login_page();
    let mut recorder = Recorder::new(viewport());
    recorder.activate(&mut page.doc, &tracer());

    assert!(recorder.preview().is_none());

    let mut event = ClickEvent::new(page.home_link, 100.0, 200.0);
    recorder.handle_click(&page.doc, &mut event, &tracer());

    let preview = recorder.preview().expect("preview after a capture");
    assert_eq!(preview.target, page.home_link);
    assert_eq!(preview.layout.top, 210.0);
    assert_eq!(preview.layout.left, 110.0);

    let keys: Vec<&str> = preview.fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["tagName", "className", "linkText", "partialLinkText", "cssSelector", "xPath"]
    );

    recorder.dismiss_preview();
    assert!(recorder.preview().is_none());
}

#[test]
fn panel_position_clamps_to_viewport() {
    let vp = viewport();

    let near_corner = panel_position(1270.0, 790.0, &vp);
    assert_eq!(near_corner.left, vp.width - PANEL_WIDTH);
    assert_eq!(near_corner.top, vp.height - PANEL_HEIGHT);

    let roomy = panel_position(100.0, 100.0, &vp);
    assert_eq!(roomy.left, 110.0);
    assert_eq!(roomy.top, 110.0);
}
