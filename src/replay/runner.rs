use crate::capture::capture_model::{ChangeEvent, ClickEvent};
use crate::capture::overlay::STOP_BUTTON_ID;
use crate::control::adapter::{Command, ControlSurface, LocatorSink};
use crate::dom::dom_model::{Document, NodeId};
use crate::dom::error::DomError;
use crate::replay::replay_model::{InteractionScript, ScriptStep};

// ============================================================================
// Script runner - drives a control surface through a scripted session
// ============================================================================

/// Replay an interaction script against a document.
///
/// Starts a recording, executes every step, and sends a final STOP when the
/// script leaves the recorder active, so a session handoff always reaches
/// the surface's sink. Returns the number of steps executed.
pub fn run_script<S: LocatorSink>(
    doc: &mut Document,
    surface: &mut ControlSurface<S>,
    script: &InteractionScript,
    verbose: u8,
) -> Result<usize, DomError> {
    surface.handle_command(doc, Command::Start);

    let mut steps_run = 0;
    for step in &script.steps {
        match step {
            ScriptStep::Click {
                target,
                target_index,
                x,
                y,
            } => {
                let node = resolve_target(doc, target.as_deref(), *target_index)?;
                let mut event = ClickEvent::new(node, *x, *y);
                let outcome = surface.dispatch_click(doc, &mut event);
                if verbose > 0 {
                    eprintln!("  click {:?} -> {:?}", node, outcome);
                }
            }

            ScriptStep::Change {
                target,
                target_index,
                value,
            } => {
                let node = resolve_target(doc, target.as_deref(), *target_index)?;
                let finalized = surface.dispatch_change(
                    doc,
                    &ChangeEvent {
                        target: node,
                        value: value.clone(),
                    },
                );
                if verbose > 0 {
                    eprintln!("  change {:?} -> {} finalized", node, finalized);
                }
            }

            ScriptStep::DismissPreview => surface.dismiss_preview(),

            ScriptStep::ClickStopBanner => {
                let button = doc.element_by_dom_id(STOP_BUTTON_ID).ok_or_else(|| {
                    DomError::ElementNotFound {
                        wanted: format!("#{} (is the recorder active?)", STOP_BUTTON_ID),
                    }
                })?;
                let mut event = ClickEvent::new(button, 0.0, 0.0);
                surface.dispatch_click(doc, &mut event);
            }

            ScriptStep::Stop => surface.handle_command(doc, Command::Stop),
        }
        steps_run += 1;
    }

    // A script that never stops still produces a session.
    if surface.recorder().is_active() {
        surface.handle_command(doc, Command::Stop);
    }

    Ok(steps_run)
}

fn resolve_target(
    doc: &Document,
    target: Option<&str>,
    target_index: Option<usize>,
) -> Result<NodeId, DomError> {
    if let Some(dom_id) = target {
        return doc
            .element_by_dom_id(dom_id)
            .ok_or_else(|| DomError::ElementNotFound {
                wanted: format!("id=\"{}\"", dom_id),
            });
    }

    if let Some(index) = target_index {
        return doc
            .elements()
            .get(index)
            .copied()
            .ok_or_else(|| DomError::ElementNotFound {
                wanted: format!("element index {}", index),
            });
    }

    Err(DomError::ElementNotFound {
        wanted: "step with neither target nor target_index".to_string(),
    })
}
