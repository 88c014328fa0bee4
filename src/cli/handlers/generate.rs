// EN: src/cli/handlers/generate.rs

use crate::{
    core::{
        config_loader::MatrixConfig,
        enumerator,
        filter_renderer,
        selection::{SelectionSurface, SessionOutcome, TriggerCallback},
    },
    models::{Axis, Combination, SelectionEntry},
};
use anyhow::Result;
use std::io::{self, Write};

/// Presents the matrix on `surface` and prints the filter when it triggers.
pub fn handle(config: &MatrixConfig, surface: &mut dyn SelectionSurface) -> Result<()> {
    match run_session(surface, &config.axes, stdout_sink())? {
        SessionOutcome::Triggered { checked } => {
            log::info!("Filter generated for {} checked combination(s)", checked);
        }
        SessionOutcome::Closed => log::info!("{}", t!("surface.info.closed")),
    }
    Ok(())
}

/// Enumerates `axes`, wires `sink` as the trigger and runs the surface.
pub fn run_session(
    surface: &mut dyn SelectionSurface,
    axes: &[Axis],
    sink: TriggerCallback,
) -> Result<SessionOutcome> {
    let combinations: Vec<Combination> = enumerator::enumerate(axes).collect();
    log::debug!("Enumerated {} combinations", combinations.len());

    surface.on_trigger(sink);
    surface.present(combinations)
}

/// Trigger callback that writes the rendered filter and a newline to stdout.
/// Nothing checked still prints an empty line.
pub fn stdout_sink() -> TriggerCallback {
    Box::new(|entries: &[SelectionEntry]| -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_filter(&mut stdout, entries)?;
        stdout.flush()?;
        Ok(())
    })
}

/// Writes the rendered filter for `entries` followed by a newline.
pub fn write_filter<W: Write>(out: &mut W, entries: &[SelectionEntry]) -> io::Result<()> {
    writeln!(out, "{}", filter_renderer::render_filter(entries))
}
