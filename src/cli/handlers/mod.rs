use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{ConfigError, read_config};
use crate::io::paths;
use crate::io::state::{FilePreferences, PreferenceError, PreferenceStore};

/// Error type for CLI subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no config directory: set HOME or XDG_CONFIG_HOME, or pass --config-dir")]
    NoConfigDir,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error("could not encode output: {0}")]
    Output(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand. Running without one launches the TUI from main.rs.
pub fn dispatch(
    command: Commands,
    json: bool,
    config_dir_override: Option<&Path>,
) -> Result<(), CliError> {
    let config_dir = resolve_config_dir(config_dir_override)?;
    match command {
        Commands::Theme(args) => cmd_theme(&config_dir, args, json),
        Commands::Config => cmd_config(&config_dir, json),
    }
}

fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf, CliError> {
    paths::config_dir(override_dir).ok_or(CliError::NoConfigDir)
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

fn cmd_theme(config_dir: &Path, args: ThemeArgs, json: bool) -> Result<(), CliError> {
    let prefs = FilePreferences::in_dir(config_dir);
    let (dark, stored) = apply_theme(&prefs, args.action)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&theme_json(dark, stored))?);
    } else {
        println!("{}", theme_name(dark));
    }
    Ok(())
}

/// Resolve the theme after `action`, writing it when one is given.
/// Returns `(dark, stored)`; `stored` is false only when nothing was persisted.
fn apply_theme(
    prefs: &FilePreferences,
    action: Option<ThemeAction>,
) -> Result<(bool, bool), CliError> {
    let stored = prefs.load();
    let current = stored.unwrap_or(false);
    let Some(action) = action else {
        return Ok((current, stored.is_some()));
    };
    let dark = match action {
        ThemeAction::Light => false,
        ThemeAction::Dark => true,
        ThemeAction::Toggle => !current,
    };
    // Written even when unchanged; errors go to the caller
    prefs.try_save(dark)?;
    tracing::info!(dark, path = %prefs.path().display(), "theme preference written");
    Ok((dark, true))
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn cmd_config(config_dir: &Path, json: bool) -> Result<(), CliError> {
    let config = read_config(config_dir)?;
    if json {
        let out = config_json(config_dir, &config);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_config(config_dir, &config));
    }
    Ok(())
}
