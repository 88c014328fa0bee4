//! # Axis Parser
//!
//! Turns raw `"<axis> <value>..."` strings from the command line into [`Axis`] values.
//! Tokenization follows shell rules (`shlex`), so names and values may be quoted to
//! contain whitespace: `"os linux 'mac os'"`.

use crate::models::Axis;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

lazy_static! {
    // Left-hand sides the downstream filter can evaluate without quoting.
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Errors produced while reading axis definitions.
/// Positions are 1-based to match what the user typed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AxisConfigError {
    #[error("Axis definition #{index} ('{entry}') could not be tokenized (unbalanced quotes?).")]
    /// `shlex` could not split the entry.
    Tokenize { index: usize, entry: String },
    #[error("Axis definition #{index} is empty. Expected '<axis_name> <value>...'.")]
    /// No tokens at all, or an empty axis name.
    EmptyEntry { index: usize },
    #[error("Axis definition #{index} ('{axis}') has no values. Expected '{axis} <value>...'.")]
    /// An axis name followed by nothing.
    NoValues { index: usize, axis: String },
}

/// Parses a single axis definition. `index` is the 1-based position used in errors.
pub fn parse_axis(index: usize, entry: &str) -> Result<Axis, AxisConfigError> {
    let tokens = shlex::split(entry).ok_or_else(|| AxisConfigError::Tokenize {
        index,
        entry: entry.to_string(),
    })?;

    let mut tokens = tokens.into_iter();
    let name = tokens
        .next()
        .filter(|name| !name.trim().is_empty())
        .ok_or(AxisConfigError::EmptyEntry { index })?;
    let values: Vec<String> = tokens.collect();

    if values.is_empty() {
        return Err(AxisConfigError::NoValues { index, axis: name });
    }

    Ok(Axis { name, values })
}

/// Parses every definition in order. Fails on the first malformed entry.
pub fn parse_axes_config<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Axis>, AxisConfigError> {
    let axes = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_axis(i + 1, entry.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    warn_on_known_limitations(&axes);
    Ok(axes)
}

/// Rejects axes without values. Used for axes that did not come from
/// [`parse_axis`], e.g. a matrix file.
pub fn validate_axes(axes: &[Axis]) -> Result<(), AxisConfigError> {
    for (i, axis) in axes.iter().enumerate() {
        if axis.name.trim().is_empty() {
            return Err(AxisConfigError::EmptyEntry { index: i + 1 });
        }
        if axis.values.is_empty() {
            return Err(AxisConfigError::NoValues {
                index: i + 1,
                axis: axis.name.clone(),
            });
        }
    }
    warn_on_known_limitations(axes);
    Ok(())
}

/// Logs inputs that are accepted but render into a questionable expression.
/// Nothing is rewritten: quotes stay unescaped and duplicates stay in place.
pub fn warn_on_known_limitations(axes: &[Axis]) {
    let mut seen = HashSet::new();
    for axis in axes {
        if !seen.insert(axis.name.as_str()) {
            log::warn!("Axis '{}' is defined more than once.", axis.name);
        }
        if !IDENTIFIER_RE.is_match(&axis.name) {
            log::warn!(
                "Axis name '{}' is not a plain identifier; the filter may not evaluate.",
                axis.name
            );
        }
        for value in axis.values.iter().filter(|v| v.contains('"')) {
            log::warn!(
                "Value '{}' of axis '{}' contains '\"', which is not escaped in the output.",
                value,
                axis.name
            );
        }
    }
}
