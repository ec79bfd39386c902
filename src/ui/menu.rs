use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[r] Resume"),
        Line::from("[q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over popup around the terminal notification text.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(message.to_owned()),
        Line::from(""),
        Line::from("[n] New Game"),
        Line::from("[q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
