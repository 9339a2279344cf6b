//! Frame driver
//!
//! Owns one session plus the host's input latches. The host calls
//! [`Game::advance`] once per rendered frame and reads state back through
//! shared references between frames.

use crate::error::ConfigError;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Game {
    state: GameState,
    input: TickInput,
    running: bool,
    frames: u64,
}

impl Game {
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        let state = GameState::new(tuning)?;
        log::info!(
            "Session created: {}x{} field, {}x{} bricks",
            state.tuning.field_width,
            state.tuning.field_height,
            state.bricks.rows,
            state.bricks.columns
        );
        Ok(Self {
            state,
            input: TickInput::default(),
            running: true,
            frames: 0,
        })
    }

    // === Input ===

    pub fn set_move_left(&mut self, held: bool) {
        self.input.move_left = held;
    }

    pub fn set_move_right(&mut self, held: bool) {
        self.input.move_right = held;
    }

    pub fn set_pointer_x(&mut self, x: Option<f32>) {
        self.input.pointer_x = x;
    }

    /// Queue a confirm for the next frame. Several presses before that frame
    /// still fire once.
    pub fn press_confirm(&mut self) {
        self.input.confirm = true;
    }

    pub fn press_launch(&mut self) {
        self.input.launch = true;
    }

    /// Replace the whole input state (autopilot, replays)
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    // === Loop ===

    /// Run one frame. Returns false once the loop has been stopped.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        tick(&mut self.state, &self.input);
        self.frames += 1;

        // Clear one-shot inputs after processing
        self.input.confirm = false;
        self.input.launch = false;
        true
    }

    /// Stop scheduling frames. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Loop stopped after {} frames", self.frames);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // === Queries ===

    pub fn current_phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the session for renderers that outlive the borrow
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
