use ratatui::style::Color;

use crate::game::GameState;
use crate::snake::Position;
use crate::theme::Theme;

/// Minimal drawing surface the game renders onto.
///
/// Implementations map grid cells to their own geometry (terminal cells
/// here, pixel rectangles scaled by the cell size elsewhere), which
/// keeps the core renderable without a real drawing surface.
pub trait Surface {
    /// Clears the whole surface to the given background color.
    fn clear(&mut self, background: Color);

    /// Fills a single grid cell.
    fn draw_cell(&mut self, cell: Position, color: Color);

    /// Draws the status text in the surface's text slot.
    fn draw_text(&mut self, text: &str, color: Color);
}

/// Paints one frame from immutable state: background, snake, food, and
/// the score line. Pure over its inputs, so repeated calls with equal
/// state produce identical output.
pub fn render(state: &GameState, theme: &Theme, surface: &mut impl Surface) {
    surface.clear(theme.background);

    for segment in state.snake.segments() {
        surface.draw_cell(*segment, theme.snake);
    }

    surface.draw_cell(state.food, theme.food);

    surface.draw_text(&state.score_text(), theme.text);
}
