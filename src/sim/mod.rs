//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Fixed collision order (walls, paddle, bricks)
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{
    Deflection, PaddleHit, WallContact, brick_pass, impact_ratio, paddle_pass, wall_pass,
};
pub use geometry::{Bounds, Circle, Rect};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle, Wall, WallGuard};
pub use tick::{TickInput, tick};
