//! Data-driven game balance
//!
//! Loaded once at startup. Missing fields fall back to the defaults, so a
//! config only needs the values it wants to change.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_PERIOD_MS;
use crate::sim::physics::jump_clearance;

/// Weaker gravity makes jumps absurdly long
const MIN_GRAVITY: f32 = 0.01;

/// Spawns closer together than one frame pile up inside a single tick
const MIN_SPAWN_INTERVAL_MS: f64 = FRAME_PERIOD_MS;

/// Gameplay tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Added to the player's vertical velocity every frame (units/tick²)
    pub gravity: f32,
    /// Upward velocity a jump starts with (units/tick)
    pub jump_impulse: f32,

    // === Progression ===
    /// Speed floor; every run starts here (units/tick)
    pub base_speed: f32,
    /// Speed added at each milestone
    pub speed_increment: f32,
    /// Score multiple that triggers a speed increase
    pub speed_milestone: u64,
    /// Optional speed ceiling
    pub max_speed: Option<f32>,

    // === Spawning ===
    /// Delay before the next obstacle, drawn uniformly after every spawn
    pub spawn_interval_min_ms: f64,
    pub spawn_interval_max_ms: f64,
    /// Probability that a spawn is a flying obstacle
    pub flying_chance: f64,

    // === Obstacle shapes ===
    /// Ground obstacle width as a multiple of player width
    pub ground_width_scale: [f32; 2],
    /// Ground obstacle height as a multiple of player height
    pub ground_height_scale: [f32; 2],
    pub flying_width: f32,
    pub flying_height: f32,
    /// Height of a flying obstacle's bottom edge above the ground surface
    pub flying_min_altitude: f32,
    pub flying_max_altitude: f32,
    /// Frames between wing flaps
    pub wing_flap_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.9,
            jump_impulse: 15.0,

            base_speed: 3.0,
            speed_increment: 0.5,
            speed_milestone: 100,
            max_speed: None,

            spawn_interval_min_ms: 750.0,
            spawn_interval_max_ms: 1000.0,
            flying_chance: 0.3,

            ground_width_scale: [0.6, 1.0],
            ground_height_scale: [0.8, 1.2],
            flying_width: 25.0,
            flying_height: 15.0,
            flying_min_altitude: 10.0,
            flying_max_altitude: 80.0,
            wing_flap_frames: 10,
        }
    }
}

impl Tuning {
    /// Altitude band for flying obstacles.
    ///
    /// The top of the band is held below the jump clearance so a well-timed
    /// jump always gets over any flying obstacle. Anything lower than the
    /// player's height has to be jumped; anything higher passes over a
    /// standing player and only punishes a badly timed jump.
    pub fn flying_altitude_range(&self) -> (f32, f32) {
        let ceiling = (jump_clearance(self) - self.flying_height).max(0.0);
        let max = self.flying_max_altitude.min(ceiling);
        let min = self.flying_min_altitude.min(max);
        (min, max)
    }

    /// Repair values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.gravity.is_finite() && self.gravity >= MIN_GRAVITY) {
            log::warn!("Invalid gravity {}, using default", self.gravity);
            self.gravity = defaults.gravity;
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse > 0.0) {
            log::warn!("Invalid jump impulse {}, using default", self.jump_impulse);
            self.jump_impulse = defaults.jump_impulse;
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            self.base_speed = defaults.base_speed;
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            self.speed_increment = defaults.speed_increment;
        }
        if self.speed_milestone == 0 {
            self.speed_milestone = defaults.speed_milestone;
        }
        if let Some(max) = self.max_speed {
            if !max.is_finite() || max < self.base_speed {
                self.max_speed = Some(self.base_speed);
            }
        }

        if !(self.spawn_interval_min_ms.is_finite() && self.spawn_interval_min_ms > 0.0) {
            self.spawn_interval_min_ms = defaults.spawn_interval_min_ms;
        }
        if !(self.spawn_interval_max_ms.is_finite() && self.spawn_interval_max_ms > 0.0) {
            self.spawn_interval_max_ms = defaults.spawn_interval_max_ms;
        }
        self.spawn_interval_min_ms = self.spawn_interval_min_ms.max(MIN_SPAWN_INTERVAL_MS);
        self.spawn_interval_max_ms = self.spawn_interval_max_ms.max(MIN_SPAWN_INTERVAL_MS);
        if self.spawn_interval_min_ms > self.spawn_interval_max_ms {
            std::mem::swap(&mut self.spawn_interval_min_ms, &mut self.spawn_interval_max_ms);
        }
        self.flying_chance = if self.flying_chance.is_finite() {
            self.flying_chance.clamp(0.0, 1.0)
        } else {
            defaults.flying_chance
        };

        sort_range(&mut self.ground_width_scale);
        sort_range(&mut self.ground_height_scale);
        if self.flying_min_altitude > self.flying_max_altitude {
            std::mem::swap(&mut self.flying_min_altitude, &mut self.flying_max_altitude);
        }
        self.wing_flap_frames = self.wing_flap_frames.max(1);

        self
    }

    /// Environment variable naming a JSON tuning file (native only)
    #[allow(dead_code)]
    const ENV_PATH: &'static str = "DINO_TUNING";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_tuning";

    /// Parse a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Load tuning from the file named by `DINO_TUNING`, defaults otherwise
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Bad tuning in LocalStorage: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }
}

fn sort_range(range: &mut [f32; 2]) {
    if range[0] > range[1] {
        range.swap(0, 1);
    }
}
