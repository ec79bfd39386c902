use std::io;

use thiserror::Error;

/// Errors surfaced while configuring or running the game.
#[derive(Debug, Error)]
pub enum Error {
    #[error("surface {width}x{height} is not a non-zero multiple of the cell size")]
    InvalidSurface { width: u16, height: u16 },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("level {0} is out of range (1..=4)")]
    InvalidLevel(u32),

    #[error(transparent)]
    Io(#[from] io::Error),
}
