use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub mod dispatcher;
pub mod handlers;
pub mod surfaces;

/// Builds the color-aware epilog shown under `--help`.
fn build_after_help() -> &'static str {
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = t!("cli.help.after")
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// matrix-filter: tick build-matrix combinations and print the filter expression
/// that selects them.
#[derive(Parser, Debug)]
#[command(
    name = "matrix-filter",
    author,
    version,
    about,
    long_about = None,
    after_help = { build_after_help() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Matrix axis as a single shell-quoted string (e.g. "os linux mac windows").
    #[arg(value_name = "AXIS", required_unless_present = "config")]
    pub axes: Vec<String>,

    /// Increase log output (-v warnings, -vv info, -vvv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output, errors included.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read axes (and an optional title) from a TOML matrix file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Title shown above the checkbox list.
    #[arg(long)]
    pub title: Option<String>,

    /// Check the combination with this label and print the filter without prompting.
    /// Repeatable. Labels are the comma-separated values, e.g. "linux, x86".
    #[arg(long = "check", value_name = "LABEL")]
    pub checks: Vec<String>,

    /// Check every combination and print the filter without prompting.
    #[arg(long, conflicts_with = "checks")]
    pub all: bool,

    /// Print the enumerated combinations and exit.
    #[arg(long, conflicts_with_all = ["checks", "all"])]
    pub list: bool,
}
