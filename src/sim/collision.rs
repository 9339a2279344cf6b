//! Collision detection and response
//!
//! Three passes run each tick, always in this order: walls, paddle, bricks.
//! Wall and paddle contacts are debounced by latches so a ball that is still
//! overlapping on the next tick is not reflected a second time.

use super::geometry::Bounds;
use super::state::{Ball, BrickGrid, Wall, WallGuard};

/// Outcome of the wall pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    /// Reflected off a wall this tick
    Bounce(Wall),
    /// Still overlapping a wall that already reflected the ball
    Held,
    /// Ball dropped past the bottom edge
    Lost,
}

/// Check the ball against the four field edges.
///
/// Side walls take priority over the top wall, and the top wall over the
/// bottom edge. A reflection is only applied when that axis's latch is clear.
pub fn wall_pass(ball: &mut Ball, guard: &mut WallGuard, width: f32, height: f32) -> WallContact {
    let b = ball.bounds();
    let side = b.left < 0.0 || b.right > width;
    let top = b.top < 0.0;
    let bottom = b.bottom > height;

    let contact = if side {
        if guard.side {
            WallContact::Held
        } else {
            guard.side = true;
            ball.vel.x = -ball.vel.x;
            WallContact::Bounce(Wall::Side)
        }
    } else if top {
        if guard.top {
            WallContact::Held
        } else {
            guard.top = true;
            ball.vel.y = -ball.vel.y;
            WallContact::Bounce(Wall::Top)
        }
    } else if bottom {
        WallContact::Lost
    } else {
        WallContact::None
    };

    if !side {
        guard.side = false;
    }
    if !top {
        guard.top = false;
    }

    contact
}

/// Deflection zones applied on paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    pub near_zone: f32,
    pub far_zone: f32,
    pub coefficient: f32,
}

impl Deflection {
    /// New horizontal velocity after a paddle contact at `ratio`.
    ///
    /// The coefficient is signed by the travel direction. A ball with exactly
    /// zero horizontal speed has no direction, so the unsigned coefficient is
    /// used instead.
    pub fn apply(&self, dx: f32, ratio: f32) -> f32 {
        let direction = if dx > 0.0 {
            1.0
        } else if dx < 0.0 {
            -1.0
        } else {
            0.0
        };
        let signed = direction * self.coefficient;
        let signed = if signed == 0.0 { self.coefficient } else { signed };

        if ratio < self.near_zone {
            dx - signed
        } else if ratio > 1.0 - self.far_zone {
            dx + signed
        } else {
            dx
        }
    }
}

/// Where along the paddle the ball center struck, as a fraction of its width.
///
/// Measured from the edge the ball is travelling away from: the left edge for
/// rightward (or purely vertical) travel, the right edge for leftward travel.
pub fn impact_ratio(ball_x: f32, dx: f32, paddle: &Bounds) -> f32 {
    let width = paddle.width();
    let offset = if dx < 0.0 {
        paddle.right - ball_x
    } else {
        ball_x - paddle.left
    };
    (offset / width).clamp(0.0, 1.0)
}

/// A fresh paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub ratio: f32,
    pub dx: f32,
}

/// Check the ball against the paddle using strict AABB overlap.
///
/// The first tick of an overlap reflects vertical speed and deflects
/// horizontal speed; `hitting` stays set until the boxes separate.
pub fn paddle_pass(
    ball: &mut Ball,
    paddle: &Bounds,
    hitting: &mut bool,
    deflection: &Deflection,
) -> Option<PaddleHit> {
    if !ball.bounds().overlaps(paddle) {
        *hitting = false;
        return None;
    }
    if *hitting {
        return None;
    }
    *hitting = true;

    ball.vel.y = -ball.vel.y;
    let ratio = impact_ratio(ball.pos.x, ball.vel.x, paddle);
    ball.vel.x = deflection.apply(ball.vel.x, ratio);

    Some(PaddleHit {
        ratio,
        dx: ball.vel.x,
    })
}

/// Check the ball center against every standing brick.
///
/// Each brick containing the center is destroyed and flips vertical speed.
/// Returns the (row, column) of every brick broken this tick.
pub fn brick_pass(ball: &mut Ball, bricks: &mut BrickGrid) -> Vec<(u32, u32)> {
    let mut broken = Vec::new();
    for brick in bricks.visible_mut() {
        if brick.bounds().contains(ball.pos) {
            ball.vel.y = -ball.vel.y;
            brick.hidden = true;
            broken.push((brick.row, brick.column));
        }
    }
    broken
}
