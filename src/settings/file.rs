//! Settings file persistence.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::Result;

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "PAROLA_CONFIG";

/// Settings file path: `$PAROLA_CONFIG`, else `<config dir>/parola/settings.json`.
pub fn path() -> PathBuf {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return PathBuf::from(p);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parola")
        .join("settings.json")
}

/// Log file used while the interactive screen owns the terminal.
pub fn log_path() -> PathBuf {
    log_path_beside(&path())
}

fn log_path_beside(settings: &Path) -> PathBuf {
    settings.with_file_name("parola.log")
}

pub fn load(path: &Path) -> Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) if !settings.within_limits() => {
            warn!(
                path = %path.display(),
                pass_length = settings.pass_length.get(),
                number_of_passwords = settings.number_of_passwords,
                "settings out of range, using defaults"
            );
            Ok(Settings::default())
        }
        Ok(settings) => {
            debug!(path = %path.display(), "loaded settings");
            Ok(settings)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}
