use crate::report::report_model::{SessionReport, row_number};

// ============================================================================
// HTML renderer - self-contained locator table
// ============================================================================

/// Render a session as a self-contained HTML table.
///
/// Columns: Sr. No. (1-based, zero-padded), Command (the triggering event),
/// Locators (non-null locator fields as `key: value` lines), Value (for
/// deferred captures). Inline CSS, no external dependencies.
pub fn generate_html_report(report: &SessionReport) -> String {
    let mut rows = String::new();

    for (index, record) in report.records.iter().enumerate() {
        let mut locator_lines = String::new();
        for (key, value) in record.preview_fields() {
            locator_lines.push_str(&format!(
                "<div><strong>{}</strong>: {}</div>\n",
                key,
                escape_html(&value)
            ));
        }
        if locator_lines.is_empty() {
            locator_lines.push_str("-");
        }

        rows.push_str(&format!(
            r#"<tr>
<td>{number}</td>
<td>{event}</td>
<td>{locators}</td>
<td>{value}</td>
</tr>
"#,
            number = row_number(index),
            event = escape_html(&record.event_name),
            locators = locator_lines,
            value = record
                .value
                .as_deref()
                .map(escape_html)
                .unwrap_or_else(|| "-".to_string()),
        ));
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">No locators captured.</td></tr>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: #22c55e; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
table {{ width: 100%; border-collapse: collapse; background: white; font-size: 14px; }}
th, td {{ border: 1px solid #ddd; padding: 8px 12px; text-align: left; vertical-align: top; }}
th {{ background: #f0f0f0; }}
td div {{ margin-bottom: 4px; word-break: break-word; }}
</style>
</head>
<body>
<div class="header">
<h1>{title}</h1>
<p>{total} captured locator{plural}</p>
</div>
<div class="content">
<table>
<thead>
<tr>
<th>Sr. No.</th>
<th>Command</th>
<th>Locators</th>
<th>Value</th>
</tr>
</thead>
<tbody>
{rows}
</tbody>
</table>
</div>
</body>
</html>"##,
        title = escape_html(&report.title),
        total = report.total,
        plural = if report.total == 1 { "" } else { "s" },
        rows = rows,
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
