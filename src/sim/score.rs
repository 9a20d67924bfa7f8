//! Score and speed progression

use super::state::GameState;
use crate::tuning::Tuning;

/// What a score tick changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTick {
    pub score: u64,
    /// New speed, if a milestone was crossed and the cap allowed an increase
    pub speed_up: Option<f32>,
}

/// Add one point; raise the speed on every exact milestone multiple
pub fn score_tick(state: &mut GameState, tuning: &Tuning) -> ScoreTick {
    state.score += 1;

    let mut speed_up = None;
    if state.score.is_multiple_of(tuning.speed_milestone.max(1)) {
        let mut speed = state.speed + tuning.speed_increment;
        if let Some(max) = tuning.max_speed {
            speed = speed.min(max);
        }
        if speed > state.speed {
            log::debug!("Score {}: speed {} -> {}", state.score, state.speed, speed);
            state.speed = speed;
            speed_up = Some(speed);
        }
    }

    ScoreTick {
        score: state.score,
        speed_up,
    }
}
