//! Settings persistence: a flat JSON file, loaded and validated at
//! startup and written back on demand. File-picker dialogs are the
//! surrounding shell's concern, not this module's.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use marksman_core::settings::{Settings, SettingsError};

/// Why loading or saving the settings file failed.
#[derive(Debug)]
pub enum SettingsIoError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(SettingsError),
}

impl fmt::Display for SettingsIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsIoError::Io(err) => write!(f, "settings file I/O failed: {err}"),
            SettingsIoError::Parse(err) => write!(f, "settings file is not valid JSON: {err}"),
            SettingsIoError::Invalid(err) => write!(f, "settings rejected: {err}"),
        }
    }
}

impl Error for SettingsIoError {}

impl From<std::io::Error> for SettingsIoError {
    fn from(err: std::io::Error) -> Self {
        SettingsIoError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsIoError {
    fn from(err: serde_json::Error) -> Self {
        SettingsIoError::Parse(err)
    }
}

/// Load and validate settings. Missing fields fall back to defaults,
/// so a file carrying only the player's overrides is fine.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsIoError> {
    let text = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&text)?;
    settings.validate().map_err(SettingsIoError::Invalid)?;
    Ok(settings)
}

/// Write settings as pretty-printed JSON.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsIoError> {
    let text = serde_json::to_string_pretty(settings)?;
    fs::write(path, text)?;
    Ok(())
}
