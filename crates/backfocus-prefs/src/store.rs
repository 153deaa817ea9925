//! Key-value preference storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PreferenceError;

const PREFS_FILENAME: &str = "preferences.json";
const CONFIG_DIR_NAME: &str = "backfocus";

/// Minimal string key-value store scoped to the application.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

/// In-memory store; nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk.
///
/// The file is read once on open and rewritten on every change. A missing
/// or unreadable file starts an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_from_path(&path).unwrap_or_default();
        Self { path, values }
    }

    /// Open the store at the standard location.
    /// Uses the XDG config dir, falling back to the working directory.
    pub fn open_default() -> Result<Self, PreferenceError> {
        let path = default_path().ok_or(PreferenceError::NoLocation)?;
        Ok(Self::open(path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// The in-memory value only changes once the file is written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.save() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        let Some(old) = self.values.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.save() {
            self.values.insert(key.to_string(), old);
            return Err(err);
        }
        Ok(())
    }
}

fn load_from_path(path: &Path) -> Option<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(values) => Some(values),
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable preference file: {e}");
            None
        }
    }
}

/// Standard preference file location.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    xdg_prefs_path().or_else(cwd_prefs_path)
}

/// Get the XDG config directory path for the preference file.
fn xdg_prefs_path() -> Option<PathBuf> {
    // Try XDG_CONFIG_HOME, fall back to ~/.config
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PREFS_FILENAME))
}

fn cwd_prefs_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(format!(".{CONFIG_DIR_NAME}_{PREFS_FILENAME}")))
}
