//! # Filter Renderer
//!
//! Builds the matrix filter expression from the checked combinations:
//!
//! ```text
//! (os == "linux" && arch == "x86") || (os == "mac" && arch == "arm")
//! ```
//!
//! Values are wrapped in double quotes as-is. A value that itself contains `"`
//! produces a malformed expression; this is a known limitation and nothing is escaped.

use crate::models::{Combination, SelectionEntry};

/// Equality between an axis and a quoted value.
pub const EQ_TOKEN: &str = "==";
/// Joins the equality tests of one combination.
pub const AND_TOKEN: &str = "&&";
/// Joins the clauses of the checked combinations.
pub const OR_TOKEN: &str = "||";

/// Renders one combination as a parenthesized conjunction of equality tests.
pub fn render_clause(combination: &Combination) -> String {
    let tests: Vec<String> = combination
        .assignments()
        .iter()
        .map(|a| format!("{} {} \"{}\"", a.axis, EQ_TOKEN, a.value))
        .collect();
    format!("({})", tests.join(&format!(" {} ", AND_TOKEN)))
}

/// Renders every checked entry and joins the clauses with `||`.
/// Returns an empty string when nothing is checked.
pub fn render_filter<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a SelectionEntry>,
{
    render_combinations(
        entries
            .into_iter()
            .filter(|entry| entry.checked)
            .map(|entry| &entry.combination),
    )
}

/// Renders the given combinations, all treated as checked.
pub fn render_combinations<'a, I>(combinations: I) -> String
where
    I: IntoIterator<Item = &'a Combination>,
{
    combinations
        .into_iter()
        .map(render_clause)
        .collect::<Vec<_>>()
        .join(&format!(" {} ", OR_TOKEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, &str)], checked: bool) -> SelectionEntry {
        SelectionEntry::new(Combination::from_pairs(pairs.iter().copied()), checked)
    }

    #[test]
    fn test_nothing_checked_renders_empty_string() {
        let entries = vec![
            entry(&[("os", "linux")], false),
            entry(&[("os", "mac")], false),
        ];
        assert_eq!(render_filter(&entries), "");
        assert_eq!(render_filter(&Vec::<SelectionEntry>::new()), "");
    }

    #[test]
    fn test_single_checked_combination() {
        let entries = vec![
            entry(&[("os", "linux"), ("arch", "x86")], true),
            entry(&[("os", "mac"), ("arch", "arm")], false),
        ];
        assert_eq!(render_filter(&entries), r#"(os == "linux" && arch == "x86")"#);
    }

    #[test]
    fn test_checked_combinations_are_or_joined() {
        let entries = vec![entry(&[("os", "linux")], true), entry(&[("os", "mac")], true)];
        assert_eq!(render_filter(&entries), r#"(os == "linux") || (os == "mac")"#);
    }

    #[test]
    fn test_render_keeps_entry_order() {
        let entries = vec![
            entry(&[("os", "mac")], true),
            entry(&[("os", "bsd")], false),
            entry(&[("os", "linux")], true),
        ];
        assert_eq!(render_filter(&entries), r#"(os == "mac") || (os == "linux")"#);
    }

    #[test]
    fn test_quotes_inside_values_are_not_escaped() {
        let entries = vec![entry(&[("label", r#"say "hi""#)], true)];
        assert_eq!(render_filter(&entries), r#"(label == "say "hi"")"#);
    }

    #[test]
    fn test_empty_combination_renders_empty_parentheses() {
        assert_eq!(render_clause(&Combination::default()), "()");
    }
}
