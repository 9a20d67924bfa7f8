//! Score display collaborators
//!
//! The game pushes plain integers and a game-over flag; how they are shown
//! is up to the implementation (DOM text on the web, log lines natively).

/// Receives score, high score and game-over visibility updates
pub trait Hud {
    fn show_score(&mut self, score: u64);
    fn show_high_score(&mut self, high_score: u64);
    fn show_game_over(&mut self, visible: bool);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHud;

impl Hud for NullHud {
    fn show_score(&mut self, _score: u64) {}
    fn show_high_score(&mut self, _high_score: u64) {}
    fn show_game_over(&mut self, _visible: bool) {}
}

/// Writes HUD changes to the log (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHud {
    last_reported: u64,
}

impl LogHud {
    /// Score interval between progress lines
    const REPORT_EVERY: u64 = 100;
}

impl Hud for LogHud {
    fn show_score(&mut self, score: u64) {
        if score < self.last_reported {
            self.last_reported = 0;
        }
        if score >= self.last_reported + Self::REPORT_EVERY {
            self.last_reported = score;
            log::info!("Score {}", score);
        }
    }

    fn show_high_score(&mut self, high_score: u64) {
        log::info!("High score {}", high_score);
    }

    fn show_game_over(&mut self, visible: bool) {
        if visible {
            log::info!("GAME OVER");
        }
    }
}
