use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};
use super::theme::{PreferenceStore, THEME_PREF_KEY};

/// The on-disk preference document. Fields default individually so files
/// written by older builds keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Option<String>,
}

/// Durable preference storage backed by a JSON document on disk.
///
/// Reads happen once at construction; every `set` writes the file back.
/// Storage failures are logged and otherwise ignored, matching the app's
/// treat-storage-as-always-working model.
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: Prefs,
}

impl FilePreferenceStore {
    /// Load preferences from the platform config directory.
    pub fn load_default() -> Self {
        Self::load_from(default_prefs_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let prefs = match read_prefs(&path) {
            Ok(prefs) => prefs,
            // No file yet: first run, nothing stored.
            Err(AppError::Io(_)) => Prefs::default(),
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Prefs::default()
            }
        };
        Self { path, prefs }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.prefs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_prefs(path: &Path) -> Result<Prefs> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::Prefs(format!("failed to parse {}: {}", path.display(), e)))
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            THEME_PREF_KEY => self.prefs.theme.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            THEME_PREF_KEY => self.prefs.theme = Some(value.to_string()),
            _ => {
                warn!("ignoring unknown preference key {:?}", key);
                return;
            }
        }
        if let Err(e) = self.persist() {
            warn!("failed to save preferences: {}", e);
        }
    }
}

/// Preferences file path (cross-platform)
fn default_prefs_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tripane");
    path.push("prefs.json");
    path
}
