//! Demo autopilot used by the headless runner
//!
//! Jumps when the nearest obstacle that would hit a standing player gets
//! within a fixed number of frames of the player's front edge.

use super::state::GameState;
use crate::consts::{GROUND_LINE, GROUND_SURFACE};

/// Frames of warning before contact at which the autopilot jumps
pub const LEAD_FRAMES: f32 = 6.0;

/// Should the player jump this frame?
pub fn should_jump(state: &GameState) -> bool {
    if state.player.airborne || !state.is_running() {
        return false;
    }

    let front = state.player.pos.x + state.player.size.x;
    let window = state.speed * LEAD_FRAMES;

    state
        .obstacles
        .iter()
        .filter(|o| {
            // only obstacles sharing the standing player's vertical span
            let r = o.rect();
            r.y < GROUND_SURFACE && r.bottom() > GROUND_LINE
        })
        .filter(|o| o.rect().right() > state.player.pos.x)
        .map(|o| o.pos.x - front)
        .any(|gap| gap >= 0.0 && gap <= window)
}
