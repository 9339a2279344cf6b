//! Demo-mode player
//!
//! Produces the same [`TickInput`] a human would, so demo sessions exercise the
//! exact code path of real play. Aim offsets come from a seeded RNG, making
//! every demo run reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GamePhase, GameState, TickInput};

/// Largest aim offset, as a fraction of paddle width from its center
const MAX_AIM: f32 = 0.45;

pub struct Autopilot {
    rng: Pcg32,
    /// Where under the ball the paddle center should sit (fraction of width)
    aim: f32,
    was_hitting: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let aim = rng.random_range(-MAX_AIM..MAX_AIM);
        Self {
            rng,
            aim,
            was_hitting: false,
        }
    }

    /// Current aim offset (fraction of paddle width)
    pub fn aim(&self) -> f32 {
        self.aim
    }

    /// Decide this frame's input from the visible state
    pub fn input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Ready | GamePhase::Ending => TickInput {
                confirm: true,
                ..Default::default()
            },
            GamePhase::Playing => self.play(state),
        }
    }

    fn play(&mut self, state: &GameState) -> TickInput {
        // New aim after every paddle contact so bounces vary across zones
        if state.paddle_hitting && !self.was_hitting {
            self.aim = self.rng.random_range(-MAX_AIM..MAX_AIM);
        }
        self.was_hitting = state.paddle_hitting;

        if !state.launched {
            return TickInput {
                launch: true,
                ..Default::default()
            };
        }

        let paddle = state.paddle.bounds();
        let center = paddle.left + paddle.width() / 2.0;
        let target = state.ball.pos.x - self.aim * paddle.width();
        let slack = state.tuning.paddle_speed / 2.0;

        TickInput {
            move_left: center > target + slack,
            move_right: center < target - slack,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_same_seed_same_aim() {
        let a = Autopilot::new(7);
        let b = Autopilot::new(7);
        assert_eq!(a.aim(), b.aim());
        assert!(a.aim().abs() < MAX_AIM);
    }

    #[test]
    fn test_confirms_outside_playing() {
        let mut pilot = Autopilot::new(1);
        let state = GameState::new(Tuning::default()).unwrap();
        assert!(pilot.input(&state).confirm);
    }

    #[test]
    fn test_launches_then_tracks() {
        let mut pilot = Autopilot::new(1);
        let mut state = GameState::new(Tuning::default()).unwrap();

        let input = pilot.input(&state);
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);

        let input = pilot.input(&state);
        assert!(input.launch);
        tick(&mut state, &input);
        assert!(state.launched);

        // Ball far to the left of the paddle: move left
        state.ball.pos.x = 20.0;
        let input = pilot.input(&state);
        assert!(input.move_left);
        assert!(!input.move_right);
    }

    #[test]
    fn test_demo_is_reproducible() {
        let run = |seed| {
            let mut pilot = Autopilot::new(seed);
            let mut state = GameState::new(Tuning::default()).unwrap();
            for _ in 0..3000 {
                let input = pilot.input(&state);
                tick(&mut state, &input);
            }
            (state.score, state.ball.pos, state.paddle.x())
        };
        assert_eq!(run(42), run(42));
    }
}
