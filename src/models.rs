// src/models.rs

use serde::Deserialize;
use std::fmt;

/// Separator placed between values when a combination is shown to the user.
pub const LABEL_SEPARATOR: &str = ", ";

/// A named dimension of the build matrix with its ordered list of values,
/// e.g. `os` with `["linux", "mac", "windows"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Axis {
    /// Left-hand side of every equality test for this axis.
    pub name: String,
    /// Values in the order they were declared.
    pub values: Vec<String>,
}

impl Axis {
    /// Builds an axis from anything string-like.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One `(axis, value)` pair of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// Axis name.
    pub axis: String,
    /// The value picked for that axis.
    pub value: String,
}

/// One element of the Cartesian product of all axes: exactly one value per
/// axis, in axis order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Combination {
    assignments: Vec<Assignment>,
}

impl Combination {
    /// Wraps assignments that are already in axis order.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Convenience constructor used mostly by tests and presets.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            assignments: pairs
                .into_iter()
                .map(|(axis, value)| Assignment {
                    axis: axis.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// The `(axis, value)` pairs in axis order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of axes covered.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// `true` only for the combination of zero axes.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Values in axis order, without axis names.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.value.as_str())
    }

    /// The checkbox label: comma-joined values. Axis names are left out.
    pub fn label(&self) -> String {
        self.values().collect::<Vec<_>>().join(LABEL_SEPARATOR)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A combination together with its checkbox state at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    /// The combination behind the checkbox.
    pub combination: Combination,
    /// Whether the checkbox was ticked.
    pub checked: bool,
}

impl SelectionEntry {
    /// Pairs a combination with its checkbox state.
    pub fn new(combination: Combination, checked: bool) -> Self {
        Self {
            combination,
            checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_omits_axis_names() {
        let combination = Combination::from_pairs([("os", "linux"), ("arch", "x86")]);
        assert_eq!(combination.label(), "linux, x86");
        assert_eq!(combination.to_string(), "linux, x86");
    }

    #[test]
    fn test_empty_combination_has_empty_label() {
        let combination = Combination::default();
        assert!(combination.is_empty());
        assert_eq!(combination.label(), "");
    }
}
