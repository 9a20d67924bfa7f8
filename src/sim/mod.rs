//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected, seeded RNG only
//! - Time enters only through the scheduler's clock readings
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod scheduler;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Rect, find_collision};
pub use obstacles::{advance_obstacles, next_spawn_delay, spawn_obstacle};
pub use physics::{jump, jump_clearance, update_player};
pub use scheduler::{Scheduler, TimerId};
pub use score::{ScoreTick, score_tick};
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Player, WingAnimation, WingPhase};
pub use tick::{GameEvent, end_run, frame_tick, start_run};
