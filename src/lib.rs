//! Dino Dash - A side-scrolling jump-the-obstacles runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, score)
//! - `game`: Loop driver wiring the simulation to timers and collaborators
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Best-effort key/value storage for the high score
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical world size (renderer scales this to the canvas)
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 200.0;

    /// Player top edge when standing on the ground
    pub const GROUND_LINE: f32 = 150.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Walking surface: ground obstacles stand on it
    pub const GROUND_SURFACE: f32 = GROUND_LINE + PLAYER_HEIGHT;

    /// Render/physics tick (~60 Hz)
    pub const FRAME_PERIOD_MS: f64 = 1000.0 / 60.0;
    /// Score tick
    pub const SCORE_PERIOD_MS: f64 = 100.0;
    /// Larger clock gaps are skipped rather than replayed
    pub const MAX_CATCH_UP_MS: f64 = 250.0;

    /// Number of ground obstacle sprite variants
    pub const GROUND_SPRITES: u8 = 8;

    /// Storage key for the persisted high score
    pub const HIGH_SCORE_KEY: &str = "dinoHighScore";
}
