//! Tiny persisted preference store.
//!
//! Preferences live in one TOML file (`.cache/preferences.toml` by default)
//! with a single `theme` key. Reads treat a missing or unreadable file as
//! "no value"; writes report failure to the caller, which only logs it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct PreferenceEntry {
    theme: String,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme string, verbatim.
    pub fn load_theme(&self) -> Option<String> {
        let data = fs::read_to_string(&self.path).ok()?;
        let entry: PreferenceEntry = toml::from_str(&data).ok()?;
        Some(entry.theme)
    }

    pub fn save_theme(&self, theme: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let entry = PreferenceEntry {
            theme: theme.to_string(),
        };
        let contents = toml::to_string(&entry).context("failed to serialize preferences")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
pub(crate) fn scratch_store(tag: &str) -> PreferenceStore {
    let path = std::env::temp_dir()
        .join(format!("study-deck-prefs-{}-{tag}", std::process::id()))
        .join("preferences.toml");
    let _ = fs::remove_file(&path);
    PreferenceStore::new(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_no_theme() {
        let store = scratch_store("missing");
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn saved_theme_is_read_back_verbatim() {
        let store = scratch_store("verbatim");
        store.save_theme("Solarized").expect("write preferences");
        assert_eq!(store.load_theme().as_deref(), Some("Solarized"));
    }

    #[test]
    fn corrupt_file_has_no_theme() {
        let store = scratch_store("corrupt");
        fs::create_dir_all(store.path().parent().expect("parent")).expect("dir");
        fs::write(store.path(), "theme = [").expect("write");
        assert_eq!(store.load_theme(), None);
    }
}
