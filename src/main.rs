use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasklist::cli::commands::Cli;
use tasklist::cli::handlers;
use tasklist::io::paths;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            install_tui_tracing(cli.config_dir.as_deref());
            tasklist::tui::run(cli.config_dir.as_deref())
        }
        Some(command) => {
            install_cli_tracing();
            handlers::dispatch(command, cli.json, cli.config_dir.as_deref()).map_err(Into::into)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// The TUI owns the terminal, so events go to `tasklist.log` in the config directory.
/// RUST_LOG overrides the default INFO level.
fn install_tui_tracing(config_dir_override: Option<&Path>) {
    let Some(dir) = paths::config_dir(config_dir_override) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_path(&dir))
    else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}

/// Subcommands print their result on stdout; only warnings reach stderr.
fn install_cli_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}
