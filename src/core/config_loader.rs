//! # Config Loader
//!
//! Reads an optional TOML matrix file and merges it with the axes given on the
//! command line. A matrix file looks like:
//!
//! ```toml
//! title = "Nightly matrix"
//!
//! [[axis]]
//! name = "os"
//! values = ["linux", "mac", "windows"]
//! ```

use crate::{
    constants::DEFAULT_TITLE,
    core::axis_parser::{self, AxisConfigError},
    models::Axis,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading a matrix file. Each one names the file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Could not read matrix file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML file at '{path}': {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid axis in '{path}': {source}")]
    InvalidAxis {
        path: PathBuf,
        #[source]
        source: AxisConfigError,
    },
}

/// On-disk shape of a matrix file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixFile {
    /// Optional title for the checkbox list.
    pub title: Option<String>,
    /// `[[axis]]` tables in file order.
    #[serde(default, rename = "axis")]
    pub axes: Vec<Axis>,
}

/// Everything the handlers need to build a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Title shown above the checkbox list.
    pub title: String,
    /// File axes first, then command-line axes.
    pub axes: Vec<Axis>,
}

/// Parses and validates a matrix file.
pub fn load_matrix_file(path: &Path) -> Result<MatrixFile, ConfigFileError> {
    log::debug!("Loading matrix file '{}'", path.display());

    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: MatrixFile =
        toml::from_str(&content).map_err(|source| ConfigFileError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;

    axis_parser::validate_axes(&file.axes).map_err(|source| ConfigFileError::InvalidAxis {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Matrix file '{}' defines {} axes",
        path.display(),
        file.axes.len()
    );
    Ok(file)
}

/// Builds the final configuration: file axes first, then command-line axes.
/// The title comes from `title_override`, then the file, then the default.
pub fn resolve(
    file: Option<&Path>,
    cli_axes: &[String],
    title_override: Option<&str>,
) -> anyhow::Result<MatrixConfig> {
    let file = file.map(load_matrix_file).transpose()?.unwrap_or_default();

    let mut axes = file.axes;
    axes.extend(axis_parser::parse_axes_config(cli_axes)?);

    let title = title_override
        .map(str::to_string)
        .or(file.title)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    Ok(MatrixConfig { title, axes })
}
