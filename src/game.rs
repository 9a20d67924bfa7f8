//! Loop driver
//!
//! `Game` owns the simulation state, the timers and the random source, and
//! talks to the storage and HUD collaborators. Platform code feeds it clock
//! readings and input; everything else happens inside [`Game::update`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::FRAME_PERIOD_MS;
use crate::highscores::HighScore;
use crate::persistence::Storage;
use crate::sim::{
    GameEvent, GamePhase, GameState, Scheduler, TimerId, frame_tick, jump, next_spawn_delay,
    score_tick, spawn_obstacle, start_run,
};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// What one call to [`Game::update`] did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOutcome {
    /// Frame ticks run; the caller redraws when this is non-zero
    pub frames: u32,
    /// Events since the previous update, oldest first
    pub events: Vec<GameEvent>,
}

/// A game instance holding all state
pub struct Game<S: Storage, H: Hud> {
    state: GameState,
    tuning: Tuning,
    scheduler: Scheduler,
    rng: Pcg32,
    seed: u64,
    high_score: HighScore,
    storage: S,
    hud: H,
    events: Vec<GameEvent>,
}

impl<S: Storage, H: Hud> Game<S, H> {
    /// Create a game waiting for the asset-ready signal
    pub fn new(tuning: Tuning, seed: u64, storage: S, mut hud: H) -> Self {
        let tuning = tuning.sanitized();
        let high_score = HighScore::load(&storage);
        hud.show_score(0);
        hud.show_high_score(high_score.best);
        hud.show_game_over(false);

        log::info!("Game initialized with seed: {}", seed);

        Self {
            state: GameState::new(&tuning),
            tuning,
            scheduler: Scheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            high_score,
            storage,
            hud,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn hud_mut(&mut self) -> &mut H {
        &mut self.hud
    }

    /// Assets are loaded: start the first run. Only valid in `Ready`.
    pub fn assets_ready(&mut self, now: f64) -> bool {
        if self.state.phase != GamePhase::Ready {
            return false;
        }
        self.begin_run(now);
        true
    }

    /// Start a new run after a game over. Ignored in any other phase.
    pub fn restart(&mut self, now: f64) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin_run(now);
        true
    }

    /// Jump input, applied immediately. No effect unless running and grounded.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let jumped = jump(&mut self.state.player);
        if jumped {
            self.events.push(GameEvent::Jumped);
        }
        jumped
    }

    /// Fire every timer due at `now`, in order
    pub fn update(&mut self, now: f64) -> UpdateOutcome {
        self.scheduler.observe(now);

        let mut frames = 0;
        while let Some((timer, at)) = self.scheduler.pop_due(now) {
            match timer {
                TimerId::Frame => {
                    frames += 1;
                    if let Some(obstacle_id) = frame_tick(&mut self.state, &self.tuning) {
                        self.game_over(obstacle_id);
                    }
                }
                TimerId::Spawn => {
                    let id = spawn_obstacle(&mut self.state, &self.tuning, &mut self.rng);
                    self.events.push(GameEvent::ObstacleSpawned { id });
                    // Never re-arm at or before `at`, even when the delay rounds away
                    let delay = next_spawn_delay(&self.tuning, &mut self.rng);
                    self.scheduler
                        .schedule(TimerId::Spawn, (at + delay).max(at + FRAME_PERIOD_MS));
                }
                TimerId::Score => {
                    let tick = score_tick(&mut self.state, &self.tuning);
                    self.hud.show_score(tick.score);
                    self.events.push(GameEvent::ScoreChanged { score: tick.score });
                    if let Some(speed) = tick.speed_up {
                        self.events.push(GameEvent::SpeedUp { speed });
                    }
                }
            }
        }

        UpdateOutcome {
            frames,
            events: std::mem::take(&mut self.events),
        }
    }

    fn begin_run(&mut self, now: f64) {
        start_run(&mut self.state, &self.tuning);
        let spawn_delay = next_spawn_delay(&self.tuning, &mut self.rng);
        self.scheduler.arm(now, spawn_delay);

        self.hud.show_score(0);
        self.hud.show_game_over(false);
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started, first obstacle in {:.0} ms", spawn_delay);
    }

    fn game_over(&mut self, obstacle_id: u32) {
        self.scheduler.cancel();

        let score = self.state.score;
        self.events.push(GameEvent::GameOver { score, obstacle_id });
        if self.high_score.record(score, &mut self.storage) {
            self.hud.show_high_score(score);
            self.events.push(GameEvent::NewHighScore { score });
        }
        self.hud.show_game_over(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStorage;
    use crate::sim::autopilot::should_jump;
    use crate::sim::{Obstacle, ObstacleKind};
    use crate::ui::NullHud;
    use glam::Vec2;

    #[derive(Debug, Default)]
    struct RecordingHud {
        score: u64,
        high_score: u64,
        game_over: bool,
        high_score_updates: usize,
    }

    impl Hud for RecordingHud {
        fn show_score(&mut self, score: u64) {
            self.score = score;
        }

        fn show_high_score(&mut self, high_score: u64) {
            self.high_score = high_score;
            self.high_score_updates += 1;
        }

        fn show_game_over(&mut self, visible: bool) {
            self.game_over = visible;
        }
    }

    type TestGame = Game<MemoryStorage, RecordingHud>;

    /// Tuning with spawning pushed out of reach
    fn quiet() -> Tuning {
        Tuning {
            spawn_interval_min_ms: 1e9,
            spawn_interval_max_ms: 1e9,
            ..Tuning::default()
        }
    }

    fn game_with_best(best: u64) -> TestGame {
        Game::new(
            quiet(),
            1,
            MemoryStorage::with_value(HIGH_SCORE_KEY, best),
            RecordingHud::default(),
        )
    }

    /// Step the clock in frame-sized increments
    fn run_for(game: &mut TestGame, from: f64, ms: f64) -> (f64, Vec<GameEvent>) {
        let mut now = from;
        let mut events = Vec::new();
        while now < from + ms {
            now += 16.0;
            events.extend(game.update(now).events);
        }
        (now, events)
    }

    fn crash_into_player(game: &mut TestGame) {
        let id = game.state.next_entity_id();
        game.state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Ground { sprite: 0 },
            pos: Vec2::new(PLAYER_X + 5.0, GROUND_LINE),
            size: Vec2::new(10.0, 20.0),
        });
    }

    #[test]
    fn test_nothing_ticks_before_assets_ready() {
        let mut game = game_with_best(0);
        let outcome = game.update(5000.0);
        assert_eq!(outcome.frames, 0);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.phase(), GamePhase::Ready);
        assert!(!game.jump());
        assert!(!game.restart(5000.0));
    }

    #[test]
    fn test_score_counts_every_100ms() {
        let mut game = game_with_best(0);
        assert!(game.assets_ready(0.0));
        assert!(!game.assets_ready(0.0));

        let mut now = 0.0;
        for second in 1..=5u64 {
            while now < second as f64 * 1000.0 {
                now += 5.0;
                game.update(now);
            }
            assert_eq!(game.state().score, second * 10);
        }
        assert_eq!(game.hud().score, 50);
    }

    #[test]
    fn test_speed_rises_at_hundred() {
        let mut game = game_with_best(0);
        game.assets_ready(0.0);
        let (_, events) = run_for(&mut game, 0.0, 10_050.0);
        assert_eq!(game.state().score, 100);
        assert_eq!(game.state().speed, 3.5);
        let speed_ups: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
            .collect();
        assert_eq!(speed_ups, vec![&GameEvent::SpeedUp { speed: 3.5 }]);
    }

    #[test]
    fn test_frames_run_at_sixty_hz() {
        let mut game = game_with_best(0);
        game.assets_ready(0.0);
        let frames: u32 = (1..=200).map(|i| game.update(i as f64 * 5.0).frames).sum();
        // 1000 ms of 16.67 ms frames
        assert!((59..=60).contains(&frames), "frames = {}", frames);
    }

    #[test]
    fn test_record_score_on_game_over() {
        let mut game = game_with_best(200);
        game.assets_ready(0.0);
        game.state.score = 250;
        crash_into_player(&mut game);

        let outcome = game.update(17.0);
        assert_eq!(outcome.frames, 1);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_score(), 250);
        assert_eq!(game.storage().get(HIGH_SCORE_KEY), Some(250));
        assert_eq!(game.storage().writes(), 1);
        assert_eq!(game.hud().high_score, 250);
        assert!(game.hud().game_over);
        assert!(outcome.events.contains(&GameEvent::NewHighScore { score: 250 }));
    }

    #[test]
    fn test_lower_score_keeps_record() {
        let mut game = game_with_best(200);
        game.assets_ready(0.0);
        game.state.score = 150;
        crash_into_player(&mut game);

        game.update(17.0);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_score(), 200);
        assert_eq!(game.storage().writes(), 0);
        // only the startup push
        assert_eq!(game.hud().high_score_updates, 1);
    }

    #[test]
    fn test_game_over_cancels_timers() {
        let mut game = game_with_best(0);
        game.assets_ready(0.0);
        crash_into_player(&mut game);
        game.update(17.0);
        let score = game.state().score;

        let outcome = game.update(10_000.0);
        assert_eq!(outcome.frames, 0);
        assert_eq!(game.state().score, score);
    }

    #[test]
    fn test_restart_resets_and_resumes() {
        let mut game = game_with_best(0);
        game.assets_ready(0.0);
        let (now, _) = run_for(&mut game, 0.0, 500.0);
        game.jump();
        crash_into_player(&mut game);
        game.state.player.pos.y = GROUND_LINE;
        game.update(now + 16.0);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(!game.state().obstacles.is_empty());

        let now = now + 2000.0;
        assert!(game.restart(now));
        assert!(!game.restart(now));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().speed, game.tuning().base_speed);
        assert!(game.state().obstacles.is_empty());
        assert_eq!(game.state().player.pos.y, GROUND_LINE);
        assert!(!game.state().player.airborne);
        assert!(!game.hud().game_over);

        run_for(&mut game, now, 300.0);
        assert_eq!(game.state().score, 3);
    }

    #[test]
    fn test_jump_only_once_per_landing() {
        let mut game = game_with_best(0);
        game.assets_ready(0.0);
        assert!(game.jump());
        assert!(!game.jump());
        let outcome = game.update(17.0);
        assert_eq!(
            outcome
                .events
                .iter()
                .filter(|e| **e == GameEvent::Jumped)
                .count(),
            1
        );
        run_for(&mut game, 17.0, 1000.0);
        assert!(!game.state().player.airborne);
        assert!(game.jump());
    }

    #[test]
    fn test_seeded_runs_replay_identically() {
        let play = |seed| {
            let mut game = Game::new(Tuning::default(), seed, MemoryStorage::new(), NullHud);
            game.assets_ready(0.0);
            let mut now = 0.0;
            let mut spawned = Vec::new();
            while now < 20_000.0 && game.phase() == GamePhase::Running {
                now += 16.0;
                if should_jump(game.state()) {
                    game.jump();
                }
                for event in game.update(now).events {
                    if let GameEvent::ObstacleSpawned { id } = event {
                        let o = game.state().obstacles.iter().find(|o| o.id == id).cloned();
                        spawned.push(serde_json::to_string(&o).unwrap());
                    }
                }
            }
            (spawned, game.state().score)
        };
        let (a, score_a) = play(2024);
        let (b, score_b) = play(2024);
        assert!(!a.is_empty());
        assert_eq!(a, b);
        assert_eq!(score_a, score_b);
    }

    #[test]
    fn test_tiny_spawn_interval_still_returns() {
        let tuning = Tuning {
            spawn_interval_min_ms: 1e-300,
            spawn_interval_max_ms: 1e-300,
            ..Tuning::default()
        };
        let mut game = Game::new(tuning, 3, MemoryStorage::new(), NullHud);
        assert!(game.assets_ready(1000.0));

        let outcome = game.update(1200.0);
        let spawns = outcome
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
            .count();
        assert!(spawns <= outcome.frames as usize + 1);
        assert!(game.state().obstacles.len() <= 13);
    }
}
