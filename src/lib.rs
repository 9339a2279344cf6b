//! Brickfall - A classic brick breaker simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, phases, tick)
//! - `tuning`: Data-driven game configuration
//! - `game`: Frame driver that owns a session and its input latches
//! - `autopilot`: Seeded demo-mode player

pub mod autopilot;
pub mod error;
pub mod game;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use error::ConfigError;
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal distance moved per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle's bottom edge and the field's bottom edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball center height above the bottom edge at serve
    pub const BALL_START_HEIGHT: f32 = 50.0;
    /// Launch velocity (pixels per tick)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Brick layout
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Largest grid a session accepts
    pub const MAX_BRICKS: u32 = 10_000;

    /// Paddle deflection: fraction of the paddle, measured from the edge the
    /// ball travels away from, that slows horizontal speed
    pub const DEFLECT_NEAR_ZONE: f32 = 0.35;
    /// Fraction at the far end that speeds horizontal speed up
    pub const DEFLECT_FAR_ZONE: f32 = 0.35;
    /// Horizontal speed change applied by the deflection zones
    pub const DEFLECT_COEFFICIENT: f32 = 2.0;

    /// Balls per session, counting the one in play
    pub const LIVES: u8 = 1;
}
