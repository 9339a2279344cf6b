//! Per-frame simulation tick
//!
//! Core game loop that advances one session by exactly one frame.

use super::collision::{Deflection, WallContact, brick_pass, paddle_pass, wall_pass};
use super::state::{GameEvent, GamePhase, GameState};

/// Input state as of the start of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub move_left: bool,
    /// Move paddle right (held)
    pub move_right: bool,
    /// Pointer x position; centers the paddle when it fits
    pub pointer_x: Option<f32>,
    /// Start / restart (pressed this frame)
    pub confirm: bool,
    /// Release the ball (pressed this frame)
    pub launch: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::Ready => {
            if input.confirm || input.launch {
                state.set_phase(GamePhase::Playing);
            }
        }

        GamePhase::Playing => play(state, input),

        GamePhase::Ending => {
            if input.confirm {
                state.restart();
            }
        }
    }
}

fn play(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if input.launch {
        state.launch();
    }

    if state.launched {
        collide(state);
    }

    // Entity motion freezes the moment the session ends
    if !state.game_over {
        if let Some(x) = input.pointer_x {
            state.point_paddle(x);
        }
        let speed = state.tuning.paddle_speed;
        if input.move_left {
            state.move_paddle(-speed);
        } else if input.move_right {
            state.move_paddle(speed);
        }

        if state.launched {
            state.ball.integrate();
        }
    }

    if state.game_over {
        if state.win {
            log::info!("All {} bricks cleared", state.score);
        } else {
            log::info!("Ball lost, final score {}", state.score);
        }
        state.set_phase(GamePhase::Ending);
    }
}

/// Walls, then paddle, then bricks
fn collide(state: &mut GameState) {
    let width = state.tuning.field_width;
    let height = state.tuning.field_height;

    match wall_pass(&mut state.ball, &mut state.wall_guard, width, height) {
        WallContact::Bounce(wall) => {
            log::debug!("Wall bounce {:?} at {:?}", wall, state.ball.pos);
            state.events.push(GameEvent::WallBounce(wall));
        }
        WallContact::Lost => {
            lose_ball(state);
            return;
        }
        WallContact::Held | WallContact::None => {}
    }

    let deflection = Deflection {
        near_zone: state.tuning.deflect_near_zone,
        far_zone: state.tuning.deflect_far_zone,
        coefficient: state.tuning.deflect_coefficient,
    };
    let paddle = state.paddle.bounds();
    if let Some(hit) = paddle_pass(
        &mut state.ball,
        &paddle,
        &mut state.paddle_hitting,
        &deflection,
    ) {
        log::debug!("Paddle hit at ratio {:.2}, dx now {}", hit.ratio, hit.dx);
        state.events.push(GameEvent::PaddleBounce {
            ratio: hit.ratio,
            dx: hit.dx,
        });
    }

    for (row, column) in brick_pass(&mut state.ball, &mut state.bricks) {
        state.score += 1;
        log::debug!("Brick ({}, {}) broken, score {}", row, column, state.score);
        state.events.push(GameEvent::BrickBroken { row, column });
    }

    if state.score >= state.winning_score() {
        state.win = true;
        state.game_over = true;
    }
}

fn lose_ball(state: &mut GameState) {
    let remaining = state.lives.saturating_sub(1);
    state.lives = remaining;
    state.events.push(GameEvent::LifeLost { remaining });

    if remaining > 0 {
        log::info!("Ball lost, {} left", remaining);
        state.reset_serve();
    } else {
        state.win = false;
        state.game_over = true;
    }
}
