use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a small todo list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read config and preferences from this directory
    #[arg(long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the persisted light/dark theme
    Theme(ThemeArgs),
    /// Check config.toml and print the effective settings
    Config,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme (omit to show the current one)
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
