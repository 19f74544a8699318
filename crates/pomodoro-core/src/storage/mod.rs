//! Where the settings record lives on disk.

mod settings;

pub use settings::{PersistOutcome, SettingsRecord, SettingsStore, SETTINGS_FILE_NAME};

use std::path::PathBuf;

/// Environment variable selecting the data directory flavour.
pub const ENV_VAR: &str = "POMODORO_ENV";

/// Directory name under the user's config root for a given `POMODORO_ENV`.
/// Only `dev` selects the separate development directory.
fn dir_name(env: Option<&str>) -> &'static str {
    match env.map(str::trim) {
        Some("dev") => "pomodoro-dev",
        _ => "pomodoro",
    }
}

/// Resolve and create the data directory, `~/.config/pomodoro` or
/// `~/.config/pomodoro-dev`. Without a home directory the current
/// directory is used as the root.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let env = std::env::var(ENV_VAR).ok();
    let root = dirs::home_dir().map_or_else(|| PathBuf::from("."), |home| home.join(".config"));
    let dir = root.join(dir_name(env.as_deref()));
    std::fs::create_dir_all(&dir)?;
    tracing::trace!(dir = %dir.display(), "data directory ready");
    Ok(dir)
}
