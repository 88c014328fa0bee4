//! # Selection
//!
//! Checkbox state for one session and the contract every presentation layer
//! implements. The surfaces themselves live in `cli::surfaces`; this module has no
//! UI dependency.

use crate::models::{Combination, LABEL_SEPARATOR, SelectionEntry};
use anyhow::Result;
use std::fmt;
use thiserror::Error;

/// Errors raised while changing checkbox state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// A 0-based index past the last combination.
    #[error("Combination #{index} does not exist (there are {len}).")]
    IndexOutOfRange { index: usize, len: usize },
    /// A preset label that matches no combination.
    #[error("No combination matches '{0}'.")]
    UnknownLabel(String),
}

/// What a surface reports once the session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The trigger fired with `checked` combinations selected.
    Triggered {
        /// How many boxes were ticked.
        checked: usize,
    },
    /// The surface was closed without triggering.
    Closed,
}

/// Receives the full list of entries at the moment the trigger fires.
pub type TriggerCallback = Box<dyn FnMut(&[SelectionEntry]) -> Result<()>>;

/// A presentation layer for the combination matrix.
///
/// Register the trigger with [`on_trigger`](Self::on_trigger), then call
/// [`present`](Self::present), which blocks until the session ends.
pub trait SelectionSurface: fmt::Debug {
    /// Registers the callback run when the user triggers generation.
    fn on_trigger(&mut self, callback: TriggerCallback);

    /// Shows one checkbox per combination, all unchecked, and blocks until the
    /// session is triggered or closed.
    fn present(&mut self, combinations: Vec<Combination>) -> Result<SessionOutcome>;
}

/// Checked flags for every enumerated combination. Combinations are fixed at
/// construction; only the flags change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    /// Every combination starts unchecked.
    pub fn new(combinations: impl IntoIterator<Item = Combination>) -> Self {
        Self {
            entries: combinations
                .into_iter()
                .map(|c| SelectionEntry::new(c, false))
                .collect(),
        }
    }

    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every combination with its current flag, in enumeration order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Checkbox labels in enumeration order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.combination.label()).collect()
    }

    /// The combinations currently ticked.
    pub fn checked(&self) -> impl Iterator<Item = &Combination> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| &e.combination)
    }

    /// How many combinations are ticked.
    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut SelectionEntry, SelectionError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SelectionError::IndexOutOfRange { index, len })
    }

    /// Flips one checkbox (0-based) and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, SelectionError> {
        let entry = self.entry_mut(index)?;
        entry.checked = !entry.checked;
        Ok(entry.checked)
    }

    /// Sets one checkbox (0-based).
    pub fn set(&mut self, index: usize, checked: bool) -> Result<(), SelectionError> {
        self.entry_mut(index)?.checked = checked;
        Ok(())
    }

    /// Sets every checkbox at once.
    pub fn set_all(&mut self, checked: bool) {
        for entry in &mut self.entries {
            entry.checked = checked;
        }
    }

    /// Checks every combination whose values match `label`, returning how many
    /// were checked. See [`matches_label`].
    pub fn check_matching(&mut self, label: &str) -> Result<usize, SelectionError> {
        let mut hits = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| matches_label(&e.combination, label))
        {
            entry.checked = true;
            hits += 1;
        }
        if hits == 0 {
            return Err(SelectionError::UnknownLabel(label.to_string()));
        }
        Ok(hits)
    }
}

/// Compares a user-typed label with a combination's values. The label is split on
/// `,` and each part trimmed, so `"linux,x86"` and `"linux, x86"` are the same.
pub fn matches_label(combination: &Combination, label: &str) -> bool {
    let label = label.trim();
    if combination.is_empty() {
        return label.is_empty();
    }
    let separator = LABEL_SEPARATOR.trim();
    let parts: Vec<&str> = label.split(separator).map(str::trim).collect();
    parts.len() == combination.len() && parts.iter().copied().eq(combination.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Selection {
        Selection::new(vec![
            Combination::from_pairs([("os", "linux"), ("arch", "x86")]),
            Combination::from_pairs([("os", "linux"), ("arch", "arm")]),
            Combination::from_pairs([("os", "mac"), ("arch", "arm")]),
        ])
    }

    #[test]
    fn test_new_selection_is_unchecked() {
        let selection = sample();
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.checked_count(), 0);
        assert!(selection.entries().iter().all(|e| !e.checked));
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut selection = sample();
        assert_eq!(selection.toggle(1), Ok(true));
        assert_eq!(selection.toggle(1), Ok(false));
        assert_eq!(selection.toggle(1), Ok(true));
        let checked: Vec<_> = selection.checked().map(|c| c.label()).collect();
        assert_eq!(checked, vec!["linux, arm"]);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut selection = sample();
        assert_eq!(
            selection.set(7, true),
            Err(SelectionError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_check_matching_normalizes_whitespace() {
        let mut selection = sample();
        assert_eq!(selection.check_matching("mac,arm"), Ok(1));
        assert_eq!(selection.check_matching("  linux ,  x86 "), Ok(1));
        assert_eq!(selection.checked_count(), 2);
    }

    #[test]
    fn test_check_matching_unknown_label() {
        let mut selection = sample();
        assert_eq!(
            selection.check_matching("windows, x86"),
            Err(SelectionError::UnknownLabel("windows, x86".to_string()))
        );
        // A prefix of a combination is not a match.
        assert!(selection.check_matching("linux").is_err());
    }

    #[test]
    fn test_set_all() {
        let mut selection = sample();
        selection.set_all(true);
        assert_eq!(selection.checked_count(), 3);
        selection.set_all(false);
        assert_eq!(selection.checked_count(), 0);
    }

    #[test]
    fn test_empty_combination_matches_empty_label() {
        assert!(matches_label(&Combination::default(), ""));
        assert!(!matches_label(&Combination::default(), "x"));
    }
}
