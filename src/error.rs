//! Configuration error types

use thiserror::Error;

/// Raised when a session is built from unusable tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field dimensions must be positive and finite
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Paddle size or speed is unusable
    #[error("invalid paddle: {0}")]
    InvalidPaddle(String),

    /// Ball size or start position is unusable
    #[error("invalid ball: {0}")]
    InvalidBall(String),

    /// Brick grid counts or dimensions are unusable
    #[error("invalid bricks: {0}")]
    InvalidBricks(String),

    /// Deflection zones or coefficient out of range
    #[error("invalid deflection: {0}")]
    InvalidDeflection(String),

    /// A session needs at least one ball
    #[error("invalid lives: {0}")]
    InvalidLives(u8),

    /// Tuning JSON could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
