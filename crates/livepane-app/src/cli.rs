use std::path::PathBuf;

use clap::Parser;

use livepane_common::EditorMode;

/// Livepane: an HTML/CSS/JavaScript playground with a live, sandboxed preview.
#[derive(Parser, Debug)]
#[command(name = "livepane", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `livepane=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Editor mode to start in.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<EditorMode>,

    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

fn parse_mode(s: &str) -> Result<EditorMode, String> {
    s.parse()
}

pub fn parse() -> Args {
    Args::parse()
}
