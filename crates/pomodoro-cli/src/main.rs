use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pomodoro_core::SettingsStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pomodoro", version, about = "Pomodoro work/break timer")]
struct Cli {
    /// Settings file (defaults to ~/.config/pomodoro/pomodoro.settings)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session, reading commands from stdin
    Run(commands::run::RunArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn settings_store(path: Option<PathBuf>) -> std::io::Result<SettingsStore> {
    match path {
        Some(path) => Ok(SettingsStore::new(path)),
        None => SettingsStore::open_default(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("POMODORO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = match settings_store(cli.settings) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: cannot resolve settings location: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(store, args),
        Commands::Config { action } => commands::config::run(store, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
