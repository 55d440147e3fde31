// ============================================================
// Layer 6 — Theme Preference Store
// ============================================================
// Persists the light/dark preference across runs.
//
// Files inside the state directory:
//   theme.json — the canonical preference ("light" or "dark"
//                as a JSON string)
//   tema       — legacy file from earlier versions, containing
//                "claro" or "escuro" as plain text
//
// Read order: theme.json first, then the legacy file. Anything
// unreadable or unrecognised falls back to Light — absence of
// a stored value means light, never an error. Writing always
// targets theme.json and removes the legacy file, so old state
// migrates itself on the first toggle.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::theme::Theme;

/// Canonical preference file inside the state directory
const THEME_FILE: &str = "theme.json";

/// Legacy file written by earlier versions
const LEGACY_FILE: &str = "tema";

/// File-backed store for the theme preference.
pub struct ThemeStore {
    /// The state directory holding the preference files
    dir: PathBuf,
}

impl ThemeStore {
    /// Create a store rooted at `dir`.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        // create_dir_all creates parent directories too, like `mkdir -p`
        // .ok() ignores the error if the directory already exists
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Read the stored preference. Never fails: a missing or
    /// unreadable value is simply the Light default.
    pub fn load(&self) -> Theme {
        if let Ok(raw) = fs::read_to_string(self.dir.join(THEME_FILE)) {
            if let Ok(value) = serde_json::from_str::<String>(&raw) {
                if let Some(theme) = Theme::from_stored(&value) {
                    return theme;
                }
            }
            tracing::warn!("Unrecognised theme value in {THEME_FILE}, using light");
            return Theme::Light;
        }

        // Fall back to the legacy plain-text file
        if let Ok(raw) = fs::read_to_string(self.dir.join(LEGACY_FILE)) {
            if let Some(theme) = Theme::from_stored(&raw) {
                tracing::debug!("Read theme from legacy file '{LEGACY_FILE}'");
                return theme;
            }
        }

        Theme::Light
    }

    /// Persist `theme` to the canonical file and drop the legacy
    /// file if one is still around.
    pub fn save(&self, theme: Theme) -> Result<()> {
        let path = self.dir.join(THEME_FILE);
        fs::write(&path, serde_json::to_string(theme.as_str())?)
            .with_context(|| format!("Failed to write theme to '{}'", path.display()))?;

        let legacy = self.dir.join(LEGACY_FILE);
        if legacy.exists() {
            fs::remove_file(&legacy).ok();
            tracing::debug!("Migrated legacy theme file '{LEGACY_FILE}'");
        }

        tracing::debug!("Theme saved: {}", theme.as_str());
        Ok(())
    }

    /// Flip the stored preference and return the new value.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}
