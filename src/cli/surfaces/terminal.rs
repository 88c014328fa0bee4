// src/cli/surfaces/terminal.rs

use super::fire;
use crate::{
    constants::TERMINAL_PAGE_SIZE,
    core::selection::{Selection, SelectionSurface, SessionOutcome, TriggerCallback},
    models::Combination,
};
use anyhow::Result;
use dialoguer::{MultiSelect, theme::ColorfulTheme};
use std::fmt;

/// Checkbox list in the terminal. Space toggles, Enter is the trigger and
/// Esc/`q` closes the list without output. The prompt is drawn on stderr.
pub struct TerminalSurface {
    title: String,
    page_size: usize,
    callback: Option<TriggerCallback>,
}

impl TerminalSurface {
    /// A checkbox list headed by `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_size: TERMINAL_PAGE_SIZE,
            callback: None,
        }
    }
}

impl fmt::Debug for TerminalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSurface")
            .field("title", &self.title)
            .field("page_size", &self.page_size)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl SelectionSurface for TerminalSurface {
    fn on_trigger(&mut self, callback: TriggerCallback) {
        self.callback = Some(callback);
    }

    fn present(&mut self, combinations: Vec<Combination>) -> Result<SessionOutcome> {
        let mut selection = Selection::new(combinations);
        if selection.is_empty() {
            log::warn!("{}", t!("surface.warn.no_combinations"));
            return Ok(SessionOutcome::Closed);
        }

        let labels = selection.labels();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(t!("surface.prompt"), title = self.title))
            .items(&labels)
            .max_length(self.page_size)
            .report(false)
            .interact_opt()?;

        let Some(picked) = picked else {
            log::info!("{}", t!("surface.info.closed"));
            return Ok(SessionOutcome::Closed);
        };

        for index in picked {
            selection.set(index, true)?;
        }
        fire(&mut self.callback, &selection)
    }
}
