// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `session`, `ask` and `theme`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::render::RenderOptions;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive question-answering session
    Session(SessionArgs),

    /// Answer a single question and exit
    Ask(AskArgs),

    /// Show, toggle, or set the persisted display theme
    Theme(ThemeArgs),
}

/// Display flags shared by `session` and `ask`.
/// They map one-to-one onto the renderer's RenderOptions.
#[derive(Args, Debug)]
pub struct DisplayArgs {
    /// Show at most this many answers per query
    #[arg(long, default_value_t = 2)]
    pub max_answers: usize,

    /// Show every answer the service returns, ignoring --max-answers
    #[arg(long)]
    pub all_answers: bool,

    /// Display raw confidence percentages without capping at 100%
    #[arg(long)]
    pub no_clamp: bool,
}

/// Convert CLI display flags into the renderer's policy type.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<&DisplayArgs> for RenderOptions {
    fn from(a: &DisplayArgs) -> Self {
        RenderOptions {
            max_answers_shown: if a.all_answers { None } else { Some(a.max_answers) },
            clamp_confidence:  !a.no_clamp,
        }
    }
}

/// All arguments for the `session` command
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Preload the context passage from this file
    #[arg(long)]
    pub context_file: Option<String>,

    /// Directory holding persisted state (the theme preference)
    #[arg(long, default_value = ".context-qa")]
    pub state_dir: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// All arguments for the `ask` command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// The context passage, given inline
    #[arg(long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Read the context passage from this file instead
    #[arg(long)]
    pub context_file: Option<String>,

    /// Directory holding persisted state (the theme preference)
    #[arg(long, default_value = ".context-qa")]
    pub state_dir: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// All arguments for the `theme` command
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// What to do with the stored preference
    #[command(subcommand)]
    pub action: ThemeAction,

    /// Directory holding persisted state (the theme preference)
    #[arg(long, default_value = ".context-qa")]
    pub state_dir: String,
}

/// The operations on the stored theme preference
#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the stored preference
    Show,

    /// Flip between light and dark
    Toggle,

    /// Store an explicit preference
    Set {
        /// "light" or "dark" (legacy "claro"/"escuro" accepted)
        value: String,
    },
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_flags_give_strict_options() {
        let args = DisplayArgs { max_answers: 2, all_answers: false, no_clamp: false };
        let options = RenderOptions::from(&args);
        assert_eq!(options.max_answers_shown, Some(2));
        assert!(options.clamp_confidence);
    }

    #[test]
    fn test_all_answers_overrides_max() {
        let args = DisplayArgs { max_answers: 2, all_answers: true, no_clamp: true };
        let options = RenderOptions::from(&args);
        assert_eq!(options.max_answers_shown, None);
        assert!(!options.clamp_confidence);
    }
}
