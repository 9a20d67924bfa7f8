//! Frame tick and run state transitions
//!
//! Order inside a frame matters: the player moves, then obstacles move, then
//! collision is checked, so an obstacle can hit on the same tick it arrives.

use serde::{Deserialize, Serialize};

use super::collision::find_collision;
use super::obstacles::advance_obstacles;
use super::physics::update_player;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Notable things that happened while advancing the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (first start or restart)
    RunStarted,
    /// The player left the ground
    Jumped,
    ObstacleSpawned { id: u32 },
    ScoreChanged { score: u64 },
    SpeedUp { speed: f32 },
    /// The run ended against this obstacle
    GameOver { score: u64, obstacle_id: u32 },
    /// The stored best was beaten
    NewHighScore { score: u64 },
}

/// Advance one frame. Returns the obstacle hit, if the run just ended.
pub fn frame_tick(state: &mut GameState, tuning: &Tuning) -> Option<u32> {
    if !state.is_running() {
        return None;
    }

    state.time_ticks += 1;

    update_player(&mut state.player);
    let culled = advance_obstacles(state, tuning);
    if culled > 0 {
        log::trace!("Culled {} obstacles", culled);
    }

    let hit = find_collision(&state.player, &state.obstacles)?;
    end_run(state);
    Some(hit)
}

/// Enter `Running` with a clean slate. No-op if already running.
pub fn start_run(state: &mut GameState, tuning: &Tuning) -> bool {
    if state.is_running() {
        return false;
    }
    state.reset_run(tuning);
    state.phase = GamePhase::Running;
    true
}

/// Enter `GameOver`, keeping the final scene for display
pub fn end_run(state: &mut GameState) {
    if state.is_running() {
        log::info!("Game over at score {} (tick {})", state.score, state.time_ticks);
        state.phase = GamePhase::GameOver;
    }
}
