use std::time::Duration;

use crate::error::Error;

/// Edge length of one grid cell in surface units (pixels).
pub const CELL_SIZE: u16 = 20;

/// Default drawing-surface width in surface units.
pub const DEFAULT_SURFACE_WIDTH: u16 = 400;

/// Default drawing-surface height in surface units.
pub const DEFAULT_SURFACE_HEIGHT: u16 = 300;

/// Tick interval at level 1, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 200;

/// Interval reduction per level above 1, in milliseconds.
pub const LEVEL_SPEED_STEP_MS: u64 = 50;

/// Floor for the tick interval so high levels never reach zero.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Highest level selectable from the CLI; the speed formula stays exact
/// up to this level.
pub const MAX_LEVEL: u32 = 4;

/// Logical grid dimensions in cells, derived from the surface size.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    /// Derives the grid from a drawing surface measured in surface units.
    ///
    /// Both dimensions must be non-zero exact multiples of [`CELL_SIZE`].
    pub fn from_surface(width: u16, height: u16) -> Result<Self, Error> {
        if width == 0 || height == 0 || width % CELL_SIZE != 0 || height % CELL_SIZE != 0 {
            return Err(Error::InvalidSurface { width, height });
        }

        Ok(Self {
            cols: width / CELL_SIZE,
            rows: height / CELL_SIZE,
        })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// Returns the tick interval for a level: 200ms minus 50ms per level
/// above 1, clamped at [`MIN_TICK_INTERVAL_MS`].
#[must_use]
pub fn tick_interval_for_level(level: u32) -> Duration {
    let step_ms = u64::from(level.saturating_sub(1)) * LEVEL_SPEED_STEP_MS;
    let interval_ms = BASE_TICK_INTERVAL_MS
        .saturating_sub(step_ms)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(interval_ms)
}
