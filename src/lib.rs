use crate::{
    control::adapter::{CollectingSink, ControlSurface},
    dom::fixture::PageFixture,
    locator::locator_model::LocatorRecord,
    replay::{replay_model::InteractionScript, runner::run_script},
};

pub mod capture;
pub mod cli;
pub mod control;
pub mod dom;
pub mod locator;
pub mod replay;
pub mod report;
pub mod trace;

/// Replay a script against a fixture and return the captured session.
///
/// Convenience wrapper over the fixture loader, control surface, and script
/// runner; the CLI and embedding callers go through this.
pub fn capture_session(
    fixture: &PageFixture,
    script: &InteractionScript,
) -> Result<Vec<LocatorRecord>, Box<dyn std::error::Error>> {
    let mut doc = fixture.build();
    let mut surface = ControlSurface::new(fixture.viewport, CollectingSink::new());

    run_script(&mut doc, &mut surface, script, 0)?;

    Ok(surface.sink().last_session().unwrap_or(&[]).to_vec())
}
