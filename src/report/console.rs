use crate::report::report_model::{SessionReport, row_number};

// ============================================================================
// Console renderer - formatted terminal output
// ============================================================================

/// Format a session report for terminal output.
///
/// Produces output like:
/// ```text
/// === Capture Session: checkout flow ===
///
/// 01  click
///     tagName: input
///     id: user
///     cssSelector: input#user
///     xPath: //input[@id="user"]
///     value: alice
///
/// === 1 captured locator ===
/// ```
pub fn format_console_report(report: &SessionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Capture Session: {} ===\n\n", report.title));

    if report.is_empty() {
        out.push_str("No locators captured.\n\n");
    }

    for (index, record) in report.records.iter().enumerate() {
        out.push_str(&format!("{}  {}\n", row_number(index), record.event_name));

        for (key, value) in record.preview_fields() {
            out.push_str(&format!("    {}: {}\n", key, value));
        }
        if let Some(value) = &record.value {
            out.push_str(&format!("    value: {}\n", value));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "=== {} captured locator{} ===\n",
        report.total,
        if report.total == 1 { "" } else { "s" }
    ));

    out
}
