use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Convertible to surface units by multiplying with the cell size; the
/// game itself only ever works in cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i32::from(grid.cols) && self.y < i32::from(grid.rows)
    }
}

/// Snake body and heading. Segments are ordered head-first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake is never empty")
    }

    /// Returns the cell the head moves into on the next step.
    #[must_use]
    pub fn next_head(&self) -> Position {
        let head = self.head();
        let (dx, dy) = match self.direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };

        Position {
            x: head.x + dx,
            y: head.y + dy,
        }
    }

    /// Advances one cell in the current heading. The tail is kept when
    /// `grow` is set, so the body gains exactly one segment.
    pub fn step(&mut self, grow: bool) {
        let next = self.next_head();
        self.body.push_front(next);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Sets the heading, ignoring the exact reverse of the current one.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never the case for a
    /// snake built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns the tail segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake is never empty")
    }
}
