use crate::control::adapter::{CollectingSink, ControlSurface};
use crate::control::storage::LocatorStore;
use crate::dom::dom_model::{Document, NodeId};
use crate::dom::error::DomError;
use crate::dom::fixture::PageFixture;
use crate::locator::locator_model::LocatorRecord;
use crate::locator::xpath::positional_xpath;
use crate::replay::replay_model::InteractionScript;
use crate::replay::runner::run_script;
use crate::report::console::format_console_report;
use crate::report::html::generate_html_report;
use crate::report::report_model::SessionReport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// derive subcommand
// ============================================================================

pub fn cmd_derive(
    fixture_path: &str,
    id: Option<&str>,
    index: Option<usize>,
    format: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = PageFixture::load(fixture_path)?;
    let doc = fixture.build();
    let node = lookup_element(&doc, id, index)?;

    if verbose > 0 {
        eprintln!(
            "Deriving locators for <{}> in {}",
            doc.tag_name(node).unwrap_or("?"),
            fixture_path
        );
    }

    let positional = positional_xpath(&doc, node);
    let record = LocatorRecord::for_element(&doc, node).ok_or(DomError::ElementNotFound {
        wanted: "an element node".to_string(),
    })?;

    match format {
        "json" => {
            let mut value = serde_json::to_value(&record)?;
            value["positionalXPath"] = serde_json::Value::String(positional);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            for (key, val) in record.preview_fields() {
                println!("{}: {}", key, val);
            }
            println!("positionalXPath: {}", positional);
        }
    }

    Ok(())
}

fn lookup_element(
    doc: &Document,
    id: Option<&str>,
    index: Option<usize>,
) -> Result<NodeId, Box<dyn std::error::Error>> {
    if let Some(dom_id) = id {
        return Ok(doc
            .element_by_dom_id(dom_id)
            .ok_or_else(|| DomError::ElementNotFound {
                wanted: format!("id=\"{}\"", dom_id),
            })?);
    }
    if let Some(idx) = index {
        return Ok(doc
            .elements()
            .get(idx)
            .copied()
            .ok_or_else(|| DomError::ElementNotFound {
                wanted: format!("element index {}", idx),
            })?);
    }
    Err(Box::new(DomError::ElementNotFound {
        wanted: "pass --id or --index".to_string(),
    }))
}

// ============================================================================
// replay subcommand
// ============================================================================

/// Replay an interaction script and emit the captured session.
pub fn cmd_replay(
    fixture_path: &str,
    script_path: &str,
    format: &str,
    output: Option<&str>,
    trace_path: Option<&str>,
    store_path: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = PageFixture::load(fixture_path)?;
    let mut doc = fixture.build();

    let content = std::fs::read_to_string(script_path)?;
    let script: InteractionScript = serde_yaml::from_str(&content)?;

    if verbose > 0 {
        eprintln!(
            "Replaying '{}' ({} steps) against {}",
            script.name,
            script.steps.len(),
            fixture_path
        );
    }

    let mut surface = ControlSurface::new(fixture.viewport, CollectingSink::new());
    if let Some(path) = trace_path {
        surface = surface.with_tracer(TraceLogger::new(path));
    }
    if let Some(path) = store_path {
        surface = surface.with_store(LocatorStore::new(path));
    }

    let steps_run = run_script(&mut doc, &mut surface, &script, verbose)?;

    let records = surface.sink().last_session().unwrap_or(&[]).to_vec();
    eprintln!(
        "Replayed {} steps, captured {} locator records",
        steps_run,
        records.len()
    );

    let report = SessionReport::from_records(&script.name, records);
    let output_content = match format {
        "html" => generate_html_report(&report),
        "console" => format_console_report(&report),
        _ => serde_json::to_string_pretty(&report.records)? + "\n",
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// report subcommand
// ============================================================================

/// Render a persisted session (array of locator records) as a report.
pub fn cmd_report(
    session_path: &str,
    format: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(session_path)?;
    let records: Vec<LocatorRecord> = serde_json::from_str(&content)?;

    let title = std::path::Path::new(session_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Captured Session")
        .to_string();

    let report = SessionReport::from_records(&title, records);
    let output_content = match format {
        "html" => generate_html_report(&report),
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}
