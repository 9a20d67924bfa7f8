//! Shape generation for 2D primitives
//!
//! Everything is built in world coordinates (x right, y down); the pipeline
//! maps to clip space.

use super::vertex::{Vertex, colors};
use crate::consts::{GROUND_SURFACE, WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{GamePhase, GameState, ObstacleKind, Rect, WingPhase};

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Ground band from the walking surface to the bottom of the world
pub fn ground() -> Vec<Vertex> {
    rect(
        &Rect::new(0.0, GROUND_SURFACE, WORLD_WIDTH, WORLD_HEIGHT - GROUND_SURFACE),
        colors::GROUND,
    )
}

/// Color for an obstacle by kind and animation phase
pub fn obstacle_color(kind: &ObstacleKind) -> [f32; 4] {
    match kind {
        ObstacleKind::Ground { sprite } => colors::CACTUS[*sprite as usize % colors::CACTUS.len()],
        ObstacleKind::Flying { wing, .. } => match wing.phase {
            WingPhase::Up => colors::FLYER_WINGS_UP,
            WingPhase::Down => colors::FLYER_WINGS_DOWN,
        },
    }
}

/// Build the whole frame: ground, player, obstacles.
///
/// Malformed obstacles are left out.
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6 * (2 + state.obstacles.len()));
    vertices.extend(ground());

    let player_color = if state.phase == GamePhase::GameOver {
        colors::PLAYER_DEAD
    } else {
        colors::PLAYER
    };
    vertices.extend(rect(&state.player.rect(), player_color));

    for obstacle in &state.obstacles {
        let r = obstacle.rect();
        if !r.is_finite() {
            continue;
        }
        vertices.extend(rect(&r, obstacle_color(&obstacle.kind)));
    }

    vertices
}
