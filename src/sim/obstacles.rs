//! Obstacle spawning, scrolling and culling
//!
//! All randomness comes from the caller's generator so a seeded run replays
//! the same obstacle sequence.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind, WingAnimation};
use crate::consts::{GROUND_SPRITES, GROUND_SURFACE, WORLD_WIDTH};
use crate::tuning::Tuning;

/// Spawn one obstacle at the right edge of the world. Returns its id.
pub fn spawn_obstacle<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) -> u32 {
    let kind_roll = rng.random_bool(tuning.flying_chance);
    let (kind, pos, size) = if kind_roll {
        let (min_alt, max_alt) = tuning.flying_altitude_range();
        let altitude = rng.random_range(min_alt..=max_alt);
        let size = Vec2::new(tuning.flying_width, tuning.flying_height);
        let y = GROUND_SURFACE - altitude - size.y;
        (
            ObstacleKind::Flying {
                altitude,
                wing: WingAnimation::default(),
            },
            Vec2::new(WORLD_WIDTH, y),
            size,
        )
    } else {
        let player = &state.player;
        let [w_min, w_max] = tuning.ground_width_scale;
        let [h_min, h_max] = tuning.ground_height_scale;
        let size = Vec2::new(
            player.size.x * rng.random_range(w_min..=w_max),
            player.size.y * rng.random_range(h_min..=h_max),
        );
        let sprite = rng.random_range(0..GROUND_SPRITES);
        (
            ObstacleKind::Ground { sprite },
            Vec2::new(WORLD_WIDTH, GROUND_SURFACE - size.y),
            size,
        )
    };

    let id = state.next_entity_id();
    log::debug!("Spawned obstacle {} {:?} at y={:.1} size={:?}", id, kind, pos.y, size);
    state.obstacles.push(Obstacle { id, kind, pos, size });
    id
}

/// Scroll every obstacle left by the current speed and drop the ones that
/// left the screen. Returns how many were removed.
pub fn advance_obstacles(state: &mut GameState, tuning: &Tuning) -> usize {
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
        if let ObstacleKind::Flying { wing, .. } = &mut obstacle.kind {
            wing.advance(tuning.wing_flap_frames);
        }
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_off_screen());
    before - state.obstacles.len()
}

/// Delay until the next spawn, re-drawn after every spawn
pub fn next_spawn_delay<R: Rng>(tuning: &Tuning, rng: &mut R) -> f64 {
    rng.random_range(tuning.spawn_interval_min_ms..=tuning.spawn_interval_max_ms)
}
