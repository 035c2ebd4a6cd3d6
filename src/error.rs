use thiserror::Error;

use crate::assets::Sprite;

/// Errors raised by game-logic constructors and dispatch.
#[derive(Error, Debug)]
pub enum GameError {
    /// A bullet facing token other than "N" or "S".
    #[error("invalid bullet facing {0:?}, expected \"N\" or \"S\"")]
    InvalidFacing(String),

    /// Only players and enemies can fire.
    #[error("{0:?} cannot shoot")]
    ShooterMismatch(Sprite),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}
