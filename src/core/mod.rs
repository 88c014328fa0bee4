//! # Core
//!
//! The UI-free part of the program: reading axis definitions, walking the
//! Cartesian product and rendering the filter expression.
//!
//! ## Modules
//!
//! - **`axis_parser`**: shell-style parsing of `"<axis> <value>..."` strings.
//! - **`config_loader`**: optional TOML matrix file, merged with command-line axes.
//! - **`enumerator`**: lazy Cartesian product, last axis varying fastest.
//! - **`selection`**: checkbox state and the `SelectionSurface` contract.
//! - **`filter_renderer`**: `(a == "x" && b == "y") || ...` output.

pub mod axis_parser;
pub mod config_loader;
pub mod enumerator;
pub mod filter_renderer;
pub mod selection;
