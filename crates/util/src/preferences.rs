//! User preference persistence for the sidebar.
//!
//! This module provides a tiny JSON-backed key-value store that records
//! lightweight settings such as the sidebar theme. The file is written to the
//! standard configuration directory (`~/.config/sidebar/preferences.json` on
//! most platforms) and is safe to read/write from multiple threads thanks to
//! the internal `Mutex`.
//!
//! The store only exposes two operations, `get` and `set`, through the
//! [`PreferenceStore`] trait so the UI layer can be driven by any durable
//! backend.

use std::env;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "SIDEBAR_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Directory (under the platform config dir) holding sidebar files.
pub const CONFIG_DIR_NAME: &str = "sidebar";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key-value store.
pub trait PreferenceStore: Send + Sync + Debug {
    /// Returns the string stored under `key`. Missing keys and values of any
    /// other JSON type read as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError>;
}

type PreferencesPayload = IndexMap<String, Value>;

/// Thread-safe preferences store backed by a JSON object on disk.
///
/// Keys this crate does not know about are preserved on write.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store at the default location, honouring
    /// [`PREFERENCES_PATH_ENV`] when it is set.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::open(default_preferences_path())
    }

    /// Create a store rooted at `path`. The file does not need to exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let resolved_path = path.into();
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file. Empty for ephemeral stores.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether writes reach the disk.
    pub fn is_persistent(&self) -> bool {
        self.persist_to_disk
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl PreferenceStore for UserPreferences {
    fn get(&self, key: &str) -> Option<String> {
        let payload = self.payload.lock().expect("preferences lock poisoned");
        match payload.get(key)? {
            Value::String(value) => Some(value.clone()),
            other => {
                warn!(key, value = %other, "Ignoring non-string preference value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.insert(key.to_string(), Value::String(value.to_string()));
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }
}

/// Resolves the preferences file location: the env override first, then the
/// platform config directory.
pub fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = UserPreferences::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.get("sidebar-theme"), None);
    }

    #[test]
    fn values_survive_a_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let store = UserPreferences::open(&path).unwrap();
        store.set("sidebar-theme", "dark").unwrap();

        drop(store);
        let reopened = UserPreferences::open(&path).unwrap();
        assert_eq!(reopened.get("sidebar-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let store = UserPreferences::open(&path).unwrap();
        assert_eq!(store.get("sidebar-theme"), None);
    }

    #[test]
    fn non_string_values_read_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"sidebar-theme": 1, "other": ["dark"]}"#).unwrap();

        let store = UserPreferences::open(&path).unwrap();
        assert_eq!(store.get("sidebar-theme"), None);
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn unrelated_keys_are_preserved_on_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"font": "Inter", "sidebar-theme": "light"}"#).unwrap();

        let store = UserPreferences::open(&path).unwrap();
        store.set("sidebar-theme", "dark").unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["font"], "Inter");
        assert_eq!(written["sidebar-theme"], "dark");
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let store = UserPreferences::ephemeral();
        store.set("sidebar-theme", "dark").unwrap();
        assert_eq!(store.get("sidebar-theme").as_deref(), Some("dark"));
        assert!(!store.is_persistent());
        assert_eq!(store.path(), Path::new(""));
    }

    #[test]
    fn env_override_wins_over_config_dir() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(custom.to_str().unwrap()), || {
            assert_eq!(default_preferences_path(), custom);
        });
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("   "), || {
            assert!(default_preferences_path().ends_with(Path::new(CONFIG_DIR_NAME).join(PREFERENCES_FILE_NAME)));
        });
    }
}
