//! Game state and core simulation types
//!
//! Everything the frame, spawn and score ticks mutate lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the asset-ready signal
    Ready,
    /// Active gameplay, timers armed
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/tick, positive is down)
    pub vy: f32,
    /// Acceleration added to `vy` every tick
    pub gravity: f32,
    /// Magnitude of the upward velocity set by a jump
    pub jump_impulse: f32,
    /// True while a jump is in progress
    pub airborne: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_LINE),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            airborne: false,
        }
    }

    /// Put the player back on the ground, standing still
    pub fn reset(&mut self) {
        self.pos.y = GROUND_LINE;
        self.vy = 0.0;
        self.airborne = false;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Wing animation frame of a flying obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WingPhase {
    #[default]
    Up,
    Down,
}

impl WingPhase {
    pub fn toggled(self) -> Self {
        match self {
            WingPhase::Up => WingPhase::Down,
            WingPhase::Down => WingPhase::Up,
        }
    }
}

/// Flap animation state. Visual only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WingAnimation {
    pub phase: WingPhase,
    pub frame_counter: u32,
}

impl WingAnimation {
    /// Advance one frame, flipping the wings every `flap_frames` frames
    pub fn advance(&mut self, flap_frames: u32) {
        self.frame_counter += 1;
        if self.frame_counter >= flap_frames.max(1) {
            self.phase = self.phase.toggled();
            self.frame_counter = 0;
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground surface; `sprite` picks one of the cactus looks
    Ground { sprite: u8 },
    /// Hovers with its bottom edge `altitude` units above the ground surface
    Flying { altitude: f32, wing: WingAnimation },
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Fully scrolled past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }

    pub fn is_flying(&self) -> bool {
        matches!(self.kind, ObstacleKind::Flying { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Score of the current run
    pub score: u64,
    /// Obstacle displacement per frame tick
    pub speed: f32,
    /// Frame ticks since the run started
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state waiting in `Ready`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Ready,
            player: Player::new(tuning),
            obstacles: Vec::new(),
            score: 0,
            speed: tuning.base_speed,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear everything a new run must not inherit
    pub fn reset_run(&mut self, tuning: &Tuning) {
        self.obstacles.clear();
        self.score = 0;
        self.speed = tuning.base_speed;
        self.time_ticks = 0;
        self.player.reset();
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
