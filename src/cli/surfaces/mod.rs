//! # Selection Surfaces
//!
//! Implementations of [`SelectionSurface`](crate::core::selection::SelectionSurface).
//! Each one only translates its own input events into [`Selection`] changes and
//! calls the registered trigger; rendering the filter happens in the callback.
//!
//! - **`terminal`**: interactive checkbox list (`dialoguer::MultiSelect`).
//! - **`preset`**: non-interactive selection from `--check`/`--all`.

use crate::core::selection::{Selection, SessionOutcome, TriggerCallback};
use anyhow::Result;

pub mod preset;
pub mod terminal;

pub use preset::{Preset, PresetSurface};
pub use terminal::TerminalSurface;

/// Hands the current state to the registered callback.
fn fire(callback: &mut Option<TriggerCallback>, selection: &Selection) -> Result<SessionOutcome> {
    let checked = selection.checked_count();
    log::debug!("Trigger fired with {} of {} checked", checked, selection.len());

    match callback {
        Some(callback) => callback(selection.entries())?,
        None => log::warn!("Trigger fired but no callback is registered."),
    }

    Ok(SessionOutcome::Triggered { checked })
}
