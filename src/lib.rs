//! Grid-based snake with a fixed-tick loop.
//!
//! The playing field is a grid derived from a fixed drawing surface and
//! a 20-unit cell size. All game logic lives in [`game`], [`food`], and
//! [`snake`]; [`controller`] owns the state and the tick schedule, and
//! [`renderer`] paints frames through a minimal [`renderer::Surface`]
//! seam so nothing in the core needs a real terminal.

pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod timer;
pub mod ui;
