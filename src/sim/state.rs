//! Game state and core simulation types
//!
//! A [`GameState`] is one session: it owns the ball, paddle, brick grid,
//! score and every latch the tick consults. Nothing outside this module and
//! the tick mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Circle, Rect};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Ready,
    /// Active simulation
    Playing,
    /// Session over, showing the outcome; confirm restarts
    Ending,
}

/// Which wall a bounce came off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Side,
    Top,
}

/// Something that happened during a tick, for hosts that play effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Launched,
    WallBounce(Wall),
    PaddleBounce { ratio: f32, dx: f32 },
    BrickBroken { row: u32, column: u32 },
    LifeLost { remaining: u8 },
    Restarted,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn shape(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn bounds(&self) -> Bounds {
        self.shape().bounds()
    }

    /// Advance one tick along the current velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(pos, width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    pub fn bounds(&self) -> Bounds {
        self.rect.bounds()
    }

    /// Move horizontally, clamped to `[0, field_width - width]`.
    /// Returns the displacement actually applied.
    pub fn move_by(&mut self, delta: f32, field_width: f32) -> f32 {
        let max_x = (field_width - self.rect.width).max(0.0);
        let old_x = self.rect.pos.x;
        self.rect.pos.x = (old_x + delta).clamp(0.0, max_x);
        self.rect.pos.x - old_x
    }

    /// Center the paddle on `x` if the whole paddle fits there.
    /// Returns the displacement applied (zero when out of range).
    pub fn move_center_to(&mut self, x: f32, field_width: f32) -> f32 {
        let half = self.rect.width / 2.0;
        if x > half && x < field_width - half {
            let old_x = self.rect.pos.x;
            self.rect.pos.x = x - half;
            self.rect.pos.x - old_x
        } else {
            0.0
        }
    }
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub column: u32,
    pub rect: Rect,
    /// Destroyed; stays set until restart
    pub hidden: bool,
}

impl Brick {
    pub fn bounds(&self) -> Bounds {
        self.rect.bounds()
    }
}

/// Bricks in a fixed row-major grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: u32,
    pub columns: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out every brick from the tuning's grid parameters
    pub fn new(tuning: &Tuning) -> Self {
        let mut bricks = Vec::with_capacity(tuning.brick_count() as usize);
        for row in 0..tuning.brick_rows {
            for column in 0..tuning.brick_columns {
                let x = column as f32 * (tuning.brick_width + tuning.brick_padding)
                    + tuning.brick_offset_left;
                let y = row as f32 * (tuning.brick_height + tuning.brick_padding)
                    + tuning.brick_offset_top;
                bricks.push(Brick {
                    row,
                    column,
                    rect: Rect::new(Vec2::new(x, y), tuning.brick_width, tuning.brick_height),
                    hidden: false,
                });
            }
        }
        Self {
            rows: tuning.brick_rows,
            columns: tuning.brick_columns,
            bricks,
        }
    }

    /// Every brick, hidden or not, in row-major order
    pub fn all(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn get(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + column) as usize)
    }

    /// Fresh traversal of the bricks still standing
    pub fn visible(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.hidden)
    }

    pub(crate) fn visible_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut().filter(|b| !b.hidden)
    }

    /// Destroy a brick. Returns false if it was already hidden or out of range.
    pub fn hide(&mut self, row: u32, column: u32) -> bool {
        if row >= self.rows || column >= self.columns {
            return false;
        }
        let idx = (row * self.columns + column) as usize;
        match self.bricks.get_mut(idx) {
            Some(brick) if !brick.hidden => {
                brick.hidden = true;
                true
            }
            _ => false,
        }
    }

    pub fn reset_all_visible(&mut self) {
        for brick in &mut self.bricks {
            brick.hidden = false;
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn hidden_count(&self) -> usize {
        self.len() - self.visible_count()
    }
}

/// Wall contact latch. Each axis re-arms only once the ball has left that
/// axis's trigger region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallGuard {
    pub side: bool,
    pub top: bool,
}

impl WallGuard {
    pub fn is_hitting(&self) -> bool {
        self.side || self.top
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Immutable session configuration
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Bricks destroyed this session
    pub score: u32,
    /// Balls left, including the one in play
    pub lives: u8,
    pub win: bool,
    pub game_over: bool,
    /// Ball released from the paddle
    pub launched: bool,
    pub wall_guard: WallGuard,
    pub paddle_hitting: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the Ready phase
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let paddle = Paddle::new(
            tuning.paddle_origin(),
            tuning.paddle_width,
            tuning.paddle_height,
        );
        let ball = Ball::new(tuning.ball_origin(), tuning.ball_velocity, tuning.ball_radius);
        let bricks = BrickGrid::new(&tuning);
        let lives = tuning.lives;

        Ok(Self {
            tuning,
            phase: GamePhase::Ready,
            score: 0,
            lives,
            win: false,
            game_over: false,
            launched: false,
            wall_guard: WallGuard::default(),
            paddle_hitting: false,
            ball,
            paddle,
            bricks,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Total bricks; reaching this score wins
    pub fn winning_score(&self) -> u32 {
        self.tuning.brick_count()
    }

    /// Put ball and paddle back at their serve positions and re-attach the ball
    pub(crate) fn reset_serve(&mut self) {
        self.paddle.rect.pos = self.tuning.paddle_origin();
        self.ball.pos = self.tuning.ball_origin();
        self.ball.vel = self.tuning.ball_velocity;
        self.launched = false;
        self.wall_guard.clear();
        self.paddle_hitting = false;
    }

    /// Full session reset into Playing. Safe to call repeatedly.
    pub fn restart(&mut self) {
        self.reset_serve();
        self.bricks.reset_all_visible();
        self.score = 0;
        self.lives = self.tuning.lives;
        self.win = false;
        self.game_over = false;
        self.time_ticks = 0;
        self.set_phase(GamePhase::Playing);
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {:?} -> {:?}", from, to);
    }

    /// Release the ball from the paddle. No-op outside Playing or once launched.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.launched {
            return false;
        }
        self.launched = true;
        self.events.push(GameEvent::Launched);
        log::debug!("Ball launched at {:?} with {:?}", self.ball.pos, self.ball.vel);
        true
    }

    /// Move the paddle by `delta`, carrying an unlaunched ball with it.
    /// No-op outside Playing.
    pub fn move_paddle(&mut self, delta: f32) -> f32 {
        if self.phase != GamePhase::Playing {
            return 0.0;
        }
        let applied = self.paddle.move_by(delta, self.tuning.field_width);
        self.carry_ball(applied);
        applied
    }

    /// Center the paddle on a pointer position. No-op outside Playing.
    pub fn point_paddle(&mut self, x: f32) -> f32 {
        if self.phase != GamePhase::Playing {
            return 0.0;
        }
        let applied = self.paddle.move_center_to(x, self.tuning.field_width);
        self.carry_ball(applied);
        applied
    }

    fn carry_ball(&mut self, applied: f32) {
        if !self.launched {
            self.ball.pos.x += applied;
        }
    }
}
