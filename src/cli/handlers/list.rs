// EN: src/cli/handlers/list.rs

use crate::{core::{config_loader::MatrixConfig, enumerator}, models::Axis};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Prints every combination, numbered from 1, without presenting a surface.
pub fn handle(config: &MatrixConfig) -> Result<()> {
    eprintln!("{}", config.title.yellow().bold());
    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &config.axes)?;
    stdout.flush()?;
    Ok(())
}

/// Writes `<n>: <label>` for each combination in enumeration order.
pub fn write_listing<W: Write>(out: &mut W, axes: &[Axis]) -> io::Result<()> {
    for (i, combination) in enumerator::enumerate(axes).enumerate() {
        writeln!(out, "{}: {}", i + 1, combination.label())?;
    }
    Ok(())
}
