use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the one-line status bar below the play area: score, level,
/// theme, and the key bindings.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score_line: &str, level: u32, theme_id: &str) {
    let line = Line::from(vec![
        Span::styled(score_line.to_owned(), Style::new().fg(Color::White)),
        Span::styled(format!("  Level {level}"), Style::new().fg(Color::Gray)),
        Span::styled(format!("  Theme {theme_id}"), Style::new().fg(Color::Gray)),
        Span::styled(
            "  [p]ause [r]esume [n]ew [1-4] level [t]heme [q]uit",
            Style::new().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
