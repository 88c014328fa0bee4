//! # Combination Enumerator
//!
//! Lazily walks the Cartesian product of a set of axes. The last axis varies fastest,
//! like an odometer, which is the standard product ordering.

use crate::models::{Assignment, Axis, Combination};

/// Iterator over every [`Combination`] of a slice of axes.
///
/// The iterator is `Clone`, so a fresh copy (or a second call to [`enumerate`])
/// restarts the walk from the first combination.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    axes: &'a [Axis],
    /// Current value index per axis. `None` once the product is exhausted.
    cursor: Option<Vec<usize>>,
    /// Combinations still to be yielded, `None` if the total overflows `usize`.
    remaining: Option<usize>,
}

/// Starts the enumeration. No axes yields one empty combination; any axis
/// with zero values yields nothing.
pub fn enumerate(axes: &[Axis]) -> Combinations<'_> {
    let remaining = count_combinations(axes);
    let cursor = if axes.iter().any(|axis| axis.values.is_empty()) {
        None
    } else {
        Some(vec![0; axes.len()])
    };
    Combinations {
        axes,
        cursor,
        remaining,
    }
}

/// Size of the product, `n1 * n2 * ... * nk`. `None` on overflow.
pub fn count_combinations(axes: &[Axis]) -> Option<usize> {
    axes.iter()
        .try_fold(1usize, |acc, axis| acc.checked_mul(axis.values.len()))
}

impl Combinations<'_> {
    fn current(&self, cursor: &[usize]) -> Combination {
        let assignments = self
            .axes
            .iter()
            .zip(cursor)
            .filter_map(|(axis, &i)| {
                axis.values.get(i).map(|value| Assignment {
                    axis: axis.name.clone(),
                    value: value.clone(),
                })
            })
            .collect();
        Combination::new(assignments)
    }

    /// Moves the cursor to the next combination. Returns `false` on wrap-around.
    fn advance(axes: &[Axis], cursor: &mut [usize]) -> bool {
        for (axis, slot) in axes.iter().zip(cursor.iter_mut()).rev() {
            *slot += 1;
            if *slot < axis.values.len() {
                return true;
            }
            *slot = 0;
        }
        false
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = self.cursor.take()?;
        let combination = self.current(&cursor);

        if Self::advance(self.axes, &mut cursor) {
            self.cursor = Some(cursor);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.cursor, self.remaining) {
            (None, _) => (0, Some(0)),
            (Some(_), Some(n)) => (n, Some(n)),
            (Some(_), None) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(axes: &[Axis]) -> Vec<String> {
        enumerate(axes).map(|c| c.label()).collect()
    }

    #[test]
    fn test_last_axis_varies_fastest() {
        let axes = vec![Axis::new("a", ["a1"]), Axis::new("b", ["b1", "b2"])];
        let combos: Vec<_> = enumerate(&axes).collect();
        assert_eq!(
            combos,
            vec![
                Combination::from_pairs([("a", "a1"), ("b", "b1")]),
                Combination::from_pairs([("a", "a1"), ("b", "b2")]),
            ]
        );
    }

    #[test]
    fn test_three_axes_order() {
        let axes = vec![
            Axis::new("os", ["linux", "mac"]),
            Axis::new("arch", ["x86", "arm"]),
            Axis::new("jdk", ["17"]),
        ];
        assert_eq!(
            labels(&axes),
            vec![
                "linux, x86, 17",
                "linux, arm, 17",
                "mac, x86, 17",
                "mac, arm, 17"
            ]
        );
    }

    #[test]
    fn test_zero_axes_yield_one_empty_combination() {
        let combos: Vec<_> = enumerate(&[]).collect();
        assert_eq!(combos, vec![Combination::default()]);
        assert_eq!(count_combinations(&[]), Some(1));
    }

    #[test]
    fn test_axis_without_values_yields_nothing() {
        let axes = vec![
            Axis::new("os", ["linux", "mac"]),
            Axis::new("arch", Vec::<String>::new()),
        ];
        assert_eq!(enumerate(&axes).count(), 0);
        assert_eq!(count_combinations(&axes), Some(0));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let axes = vec![Axis::new("a", ["1", "2", "3"]), Axis::new("b", ["x", "y"])];
        let mut combos = enumerate(&axes);
        assert_eq!(combos.size_hint(), (6, Some(6)));
        combos.next();
        combos.next();
        assert_eq!(combos.size_hint(), (4, Some(4)));
        assert_eq!(combos.by_ref().count(), 4);
        assert_eq!(combos.size_hint(), (0, Some(0)));
        assert!(combos.next().is_none());
    }

    #[test]
    fn test_clone_restarts_independently() {
        let axes = vec![Axis::new("a", ["1", "2"])];
        let mut first = enumerate(&axes);
        let snapshot = first.clone();
        first.next();
        assert_eq!(snapshot.count(), 2);
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn test_repeated_enumeration_is_stable() {
        let axes = vec![Axis::new("a", ["1", "2"]), Axis::new("b", ["x", "y", "z"])];
        assert_eq!(labels(&axes), labels(&axes));
    }

    #[test]
    fn test_count_overflow_is_reported() {
        let wide: Vec<String> = (0..1024).map(|i| i.to_string()).collect();
        let axes: Vec<Axis> = (0..8).map(|i| Axis::new(format!("a{i}"), wide.clone())).collect();
        assert_eq!(count_combinations(&axes), None);
        assert_eq!(enumerate(&axes).size_hint(), (usize::MAX, None));
    }
}
