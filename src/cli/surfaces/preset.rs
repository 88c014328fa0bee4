// src/cli/surfaces/preset.rs

use super::fire;
use crate::{
    core::selection::{Selection, SelectionSurface, SessionOutcome, TriggerCallback},
    models::Combination,
};
use anyhow::Result;
use std::fmt;

/// Which boxes a [`PresetSurface`] checks before triggering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preset {
    /// Labels as shown in the checkbox list, e.g. `"linux, x86"`.
    Labels(Vec<String>),
    /// Every combination.
    All,
}

/// Non-interactive surface: applies a [`Preset`] and triggers exactly once.
pub struct PresetSurface {
    preset: Preset,
    callback: Option<TriggerCallback>,
}

impl PresetSurface {
    /// A surface that applies `preset` when presented.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            callback: None,
        }
    }

    /// Checks the combinations with these labels.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Preset::Labels(labels.into_iter().map(Into::into).collect()))
    }

    /// Checks everything.
    pub fn all() -> Self {
        Self::new(Preset::All)
    }
}

impl fmt::Debug for PresetSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetSurface")
            .field("preset", &self.preset)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl SelectionSurface for PresetSurface {
    fn on_trigger(&mut self, callback: TriggerCallback) {
        self.callback = Some(callback);
    }

    fn present(&mut self, combinations: Vec<Combination>) -> Result<SessionOutcome> {
        let mut selection = Selection::new(combinations);

        match &self.preset {
            Preset::All => selection.set_all(true),
            Preset::Labels(labels) => {
                for label in labels {
                    let hits = selection.check_matching(label)?;
                    log::debug!("Preset '{}' checked {} combination(s)", label, hits);
                }
            }
        }

        fire(&mut self.callback, &selection)
    }
}
