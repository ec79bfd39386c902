use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

use crate::renderer::Surface;
use crate::snake::Position;

/// Drawing surface backed by a ratatui buffer region.
///
/// One grid cell maps to one terminal cell; the score text goes on the
/// bottom row of the play area.
pub struct FrameSurface<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> FrameSurface<'a> {
    /// Wraps the buffer region the play field occupies.
    #[must_use]
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        Self { buffer, area }
    }

    fn cell_to_terminal(&self, cell: Position) -> Option<(u16, u16)> {
        let x_offset = u16::try_from(cell.x).ok()?;
        let y_offset = u16::try_from(cell.y).ok()?;

        let x = self.area.x.saturating_add(x_offset);
        let y = self.area.y.saturating_add(y_offset);
        if x >= self.area.right() || y >= self.area.bottom() {
            return None;
        }

        Some((x, y))
    }
}

impl Surface for FrameSurface<'_> {
    fn clear(&mut self, background: Color) {
        let style = Style::new().bg(background);
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                self.buffer.set_string(x, y, " ", style);
            }
        }
    }

    fn draw_cell(&mut self, cell: Position, color: Color) {
        let Some((x, y)) = self.cell_to_terminal(cell) else {
            return;
        };

        self.buffer.set_string(x, y, "█", Style::new().fg(color));
    }

    fn draw_text(&mut self, text: &str, color: Color) {
        if self.area.height == 0 {
            return;
        }

        let y = self.area.bottom() - 1;
        let clipped = clip_to_width(text, usize::from(self.area.width));
        self.buffer
            .set_string(self.area.x, y, clipped, Style::new().fg(color));
    }
}

/// Returns the longest prefix whose display width fits `max_width`.
fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (index, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &text[..index];
        }
    }

    text
}
