//! Brickfall entry point
//!
//! Headless runner: plays a few demo sessions with the autopilot, restarting
//! from the Ending screen each time, then prints the final state as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use brickfall::sim::{GameEvent, GamePhase};
use brickfall::{Autopilot, Game, Tuning};

/// Demo sessions to play before stopping
const SESSIONS: u32 = 3;
/// Frame cap per session (five minutes at 60 fps)
const MAX_FRAMES_PER_SESSION: u64 = 60 * 60 * 5;

#[derive(Parser, Debug)]
#[command(name = "brickfall")]
#[command(about = "Headless brick breaker demo runner", long_about = None)]
struct Args {
    /// Tuning overrides (JSON); defaults are used when omitted
    tuning: Option<PathBuf>,

    /// Autopilot seed
    #[arg(default_value_t = 12345)]
    seed: u64,
}

fn load_tuning(path: Option<&Path>) -> Result<Tuning> {
    let Some(path) = path else {
        log::info!("Using default tuning");
        return Ok(Tuning::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning from {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning in {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let args = Args::parse();
    let tuning = load_tuning(args.tuning.as_deref())?;
    let mut game = Game::new(tuning).context("building session")?;
    let mut pilot = Autopilot::new(args.seed);

    let mut finished = 0;
    let mut session_frames = 0;
    while game.is_running() {
        let input = pilot.input(game.state());
        game.set_input(input);
        game.advance();
        session_frames += 1;

        for event in game.events() {
            if let GameEvent::PhaseChanged {
                to: GamePhase::Ending,
                ..
            } = event
            {
                let state = game.state();
                finished += 1;
                session_frames = 0;
                log::info!(
                    "Session {} over: {} (score {}/{})",
                    finished,
                    if state.win { "won" } else { "lost" },
                    state.score,
                    state.winning_score()
                );
            }
        }

        if finished >= SESSIONS {
            game.stop();
        } else if session_frames >= MAX_FRAMES_PER_SESSION {
            log::warn!("Session exceeded {} frames", MAX_FRAMES_PER_SESSION);
            game.stop();
        }
    }

    let json = serde_json::to_string_pretty(game.state()).context("serializing final state")?;
    println!("{}", json);
    Ok(())
}
