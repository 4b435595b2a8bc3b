use locator_recorder::locator::locator_model::LocatorRecord;
use locator_recorder::report::console::format_console_report;
use locator_recorder::report::html::{escape_html, generate_html_report};
use locator_recorder::report::report_model::{SessionReport, row_number};

use crate::common::fixtures::login_page;

mod common;

// ============================================================================
// Helper builders
// ============================================================================

fn sample_report() -> SessionReport {
    let page = login_page();

    let mut deferred = LocatorRecord::for_element(&page.doc, page.user_input).unwrap();
    deferred.value = Some("alice".to_string());

    let records = vec![
        deferred,
        LocatorRecord::for_element(&page.doc, page.home_link).unwrap(),
    ];
    SessionReport::from_records("login flow", records)
}

// ============================================================================
// Report model
// ============================================================================

#[test]
fn row_numbers_are_one_based_and_zero_padded() {
    assert_eq!(row_number(0), "01");
    assert_eq!(row_number(8), "09");
    assert_eq!(row_number(9), "10");
    assert_eq!(row_number(99), "100", "Three digits pass through unpadded");
}

#[test]
fn report_counts_its_records() {
    let report = sample_report();
    assert_eq!(report.total, 2);
    assert!(!report.is_empty());

    let empty = SessionReport::from_records("empty", vec![]);
    assert_eq!(empty.total, 0);
    assert!(empty.is_empty());
}

// ============================================================================
// HTML renderer
// ============================================================================

#[test]
fn html_report_renders_the_locator_table() {
    let report = sample_report();
    let html = generate_html_report(&report);

    assert!(html.contains("<th>Sr. No.</th>"));
    assert!(html.contains("<th>Command</th>"));
    assert!(html.contains("<th>Locators</th>"));
    assert!(html.contains("<th>Value</th>"));

    assert!(html.contains("<td>01</td>"), "First row number is zero-padded");
    assert!(html.contains("<td>02</td>"));
    assert!(html.contains("<td>click</td>"));
    assert!(html.contains("<td>alice</td>"), "Deferred value gets its own column");

    assert!(html.contains("<strong>id</strong>: user"));
    assert!(html.contains("<strong>linkText</strong>: Home Page"));
    assert!(
        html.contains("&quot;user&quot;"),
        "XPath quotes are escaped in the locator lines"
    );
}

#[test]
fn html_report_escapes_markup_in_values() {
    let page = login_page();
    let mut record = LocatorRecord::for_element(&page.doc, page.user_input).unwrap();
    record.value = Some("<script>alert(1)</script>".to_string());

    let html = generate_html_report(&SessionReport::from_records("xss", vec![record]));
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn html_report_handles_empty_sessions() {
    let html = generate_html_report(&SessionReport::from_records("empty", vec![]));
    assert!(html.contains("No locators captured."));
}

#[test]
fn escape_html_covers_the_specials() {
    assert_eq!(
        escape_html(r#"<a href="x">&'"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
}

// ============================================================================
// Console renderer
// ============================================================================

#[test]
fn console_report_lists_fields_per_row() {
    let report = sample_report();
    let out = format_console_report(&report);

    assert!(out.contains("=== Capture Session: login flow ==="));
    assert!(out.contains("01  click"));
    assert!(out.contains("02  click"));
    assert!(out.contains("    id: user"));
    assert!(out.contains("    value: alice"));
    assert!(out.contains("    linkText: Home Page"));
    assert!(out.contains("=== 2 captured locators ==="));
}

#[test]
fn console_report_handles_empty_sessions() {
    let out = format_console_report(&SessionReport::from_records("empty", vec![]));
    assert!(out.contains("No locators captured."));
    assert!(out.contains("=== 0 captured locators ==="));
}
