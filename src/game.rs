use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{tick_interval_for_level, GridSize};
use crate::food::place_food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Starting head cell, in grid coordinates.
pub const INITIAL_HEAD: Position = Position { x: 2, y: 2 };

/// Starting food cell, in grid coordinates.
pub const INITIAL_FOOD: Position = Position { x: 5, y: 5 };

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ready,
    Running,
    Paused,
    Over,
}

/// Complete mutable game state for one session.
///
/// Created fresh on initialize and restart, replaced wholesale rather
/// than patched.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub level: u32,
    pub interval: Duration,
    pub status: GameStatus,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates the initial state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(INITIAL_HEAD, Direction::Right),
            food: INITIAL_FOOD,
            score: 0,
            level: 1,
            interval: tick_interval_for_level(1),
            status: GameStatus::Ready,
            grid,
            rng,
        }
    }

    /// Returns the grid this session plays on.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Advances the simulation by one step.
    ///
    /// Moves the head one cell along the current heading; eating food
    /// grows the body by one and respawns the food, otherwise the tail
    /// cell is dropped. Collision is evaluated on the moved state and
    /// flips the status to [`GameStatus::Over`]. Does not render.
    pub fn advance(&mut self) {
        let eats = self.snake.next_head() == self.food;
        self.snake.step(eats);

        if eats {
            self.score += 1;
            match place_food(&mut self.rng, self.grid, &self.snake) {
                Some(cell) => self.food = cell,
                // Board is full; nothing left to play for.
                None => {
                    self.status = GameStatus::Over;
                    return;
                }
            }
        }

        if detect_collision(&self.snake, self.grid) {
            self.status = GameStatus::Over;
        }
    }

    /// Stores the level and recomputes the tick interval from it.
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.interval = tick_interval_for_level(level);
    }

    /// Returns the literal score line shown by the UI.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Returns true when the head left the grid or ran into the body.
#[must_use]
pub fn detect_collision(snake: &Snake, grid: GridSize) -> bool {
    !snake.head().is_within_bounds(grid) || snake.head_overlaps_body()
}
