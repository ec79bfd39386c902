use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a food cell uniformly among cells not occupied by the snake.
///
/// Returns `None` when the snake covers every cell.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Position> {
    let mut free = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(grid.rows) {
        for x in 0..i32::from(grid.cols) {
            let cell = Position { x, y };
            if !snake.occupies(cell) {
                free.push(cell);
            }
        }
    }

    if free.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..free.len());
    Some(free[index])
}
