//! Stored reading preferences.
//!
//! Lookups are `Option`-typed; defaults (300 WPM, light theme) are
//! applied explicitly by the caller, never through missing-key fallback
//! control flow. The engine only ever reads these; writing happens in
//! the `set` command.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeKind;

/// Read-side contract the engine wiring depends on.
pub trait SettingsProvider {
    fn wpm(&self) -> Option<u32>;
    fn theme(&self) -> Option<ThemeKind>;
}

/// Preferences as stored on disk. Both keys are optional so a file
/// written by an older build (or by hand) stays readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wpm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeKind>,
}

impl SettingsProvider for Settings {
    fn wpm(&self) -> Option<u32> {
        self.wpm
    }

    fn theme(&self) -> Option<ThemeKind> {
        self.theme
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file is normal (first run);
    /// a malformed one is ignored with a warning rather than blocking
    /// playback over a preference.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Settings::default(),
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(
                    "ignoring malformed settings file {}: {}",
                    path.display(),
                    err
                );
                Settings::default()
            }
        }
    }

    pub fn store(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

/// Default on-disk location: `$XDG_CONFIG_HOME/blinkread/settings.json`,
/// falling back to `~/.config/blinkread/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return Some(Path::new(&dir).join("blinkread").join("settings.json"));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        Path::new(&home)
            .join(".config")
            .join("blinkread")
            .join("settings.json")
    })
}
