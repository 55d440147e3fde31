// ============================================================
// Layer 6 — Console View
// ============================================================
// The real SessionView: prints blocks to stdout and routes
// diagnostics through tracing (the console's stand-in for a
// separate debug region).
//
// Theme handling on a terminal is deliberately modest — the
// dark preference renders blocks in bright white over the
// terminal's own background, light leaves the default colours
// alone. The preference matters more for being persisted than
// for how much it changes on screen.

use crate::domain::theme::Theme;
use crate::domain::traits::SessionView;

/// ANSI bright-white, used for blocks under the dark theme
const DARK_PREFIX: &str = "\x1b[97m";
const RESET: &str = "\x1b[0m";

/// Terminal-backed view.
pub struct ConsoleView {
    theme: Theme,
}

impl ConsoleView {
    /// Create a view styled for `theme`
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Restyle the view after a theme toggle
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl SessionView for ConsoleView {
    fn show(&mut self, block: &str) {
        match self.theme {
            Theme::Dark  => println!("\n{DARK_PREFIX}{block}{RESET}"),
            Theme::Light => println!("\n{block}"),
        }
    }

    fn diagnostic(&mut self, line: &str) {
        tracing::debug!("{line}");
    }
}
