use anyhow::Result;

use crate::{
    cli::{
        Cli, handlers,
        surfaces::{PresetSurface, TerminalSurface},
    },
    core::{config_loader, selection::SelectionSurface},
};

/// Resolves the matrix once, then routes to `--list` or to a selection session.
/// A malformed axis stops here, before any surface is shown.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = config_loader::resolve(cli.config.as_deref(), &cli.axes, cli.title.as_deref())?;
    log::info!("axes: {:?}", config.axes);

    if cli.list {
        return handlers::list::handle(&config);
    }

    let mut surface = build_surface(cli, &config.title);
    log::debug!("Using surface {:?}", surface);
    handlers::generate::handle(&config, surface.as_mut())
}

/// `--all` and `--check` select without prompting; otherwise the terminal list is used.
fn build_surface(cli: &Cli, title: &str) -> Box<dyn SelectionSurface> {
    if cli.all {
        Box::new(PresetSurface::all())
    } else if !cli.checks.is_empty() {
        Box::new(PresetSurface::with_labels(cli.checks.iter().cloned()))
    } else {
        Box::new(TerminalSurface::new(title))
    }
}
