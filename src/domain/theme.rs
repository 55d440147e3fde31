// ============================================================
// Layer 3 — Theme Preference Domain Type
// ============================================================
// The binary display preference: light or dark.
//
// Completely independent of the question-answering flow — it
// exists so the user's choice survives across runs. The stored
// representation is a plain lowercase string ("light"/"dark").
//
// Earlier versions of this tool stored the preference under a
// different key with Portuguese values ("claro"/"escuro").
// `from_stored` still accepts those so old state files keep
// working; the store migrates them on the next write.
//
// Reference: Rust Book §6 (Enums)

use serde::{Deserialize, Serialize};

/// The user's display preference.
/// Defaults to Light when nothing has ever been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The canonical stored string for this preference
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark  => "dark",
        }
    }

    /// The other preference — toggling is the only transition
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark  => Theme::Light,
        }
    }

    /// Parse a stored value, accepting both the canonical strings
    /// and the legacy Portuguese ones. Returns None for anything
    /// unrecognised so callers can fall back to the default.
    pub fn from_stored(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" | "claro"  => Some(Theme::Light),
            "dark"  | "escuro" => Some(Theme::Dark),
            _ => None,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        // Toggling twice returns to where we started
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(),  Theme::Dark);
    }

    #[test]
    fn test_parses_canonical_and_legacy_values() {
        assert_eq!(Theme::from_stored("dark"),   Some(Theme::Dark));
        assert_eq!(Theme::from_stored("escuro"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("claro"),  Some(Theme::Light));
        assert_eq!(Theme::from_stored(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("blue"), None);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }
}
