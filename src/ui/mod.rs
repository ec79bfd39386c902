pub mod hud;
pub mod menu;
pub mod surface;

use crate::controller::Ui;

/// Terminal-side UI sink: holds the latest score line, the pending
/// game-over notification, and the active theme id for the widgets to
/// draw from.
#[derive(Debug, Default)]
pub struct TerminalUi {
    score_line: String,
    alert: Option<String>,
    theme_id: String,
}

impl TerminalUi {
    /// Returns the most recent score line.
    #[must_use]
    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// Returns the game-over notification, when one is pending.
    #[must_use]
    pub fn pending_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns the theme id last applied through the style hook.
    #[must_use]
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }
}

impl Ui for TerminalUi {
    fn show_score(&mut self, text: &str) {
        text.clone_into(&mut self.score_line);
    }

    fn alert(&mut self, text: &str) {
        self.alert = Some(text.to_owned());
    }

    fn apply_theme(&mut self, theme_id: &str) {
        theme_id.clone_into(&mut self.theme_id);
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::Ui;

    use super::TerminalUi;

    #[test]
    fn sink_retains_the_latest_values() {
        let mut ui = TerminalUi::default();

        ui.show_score("Score: 0");
        ui.show_score("Score: 3");
        ui.apply_theme("dark");

        assert_eq!(ui.score_line(), "Score: 3");
        assert_eq!(ui.theme_id(), "dark");
        assert_eq!(ui.pending_alert(), None);

        ui.alert("Game Over! Your score: 3");
        assert_eq!(ui.pending_alert(), Some("Game Over! Your score: 3"));
    }
}
