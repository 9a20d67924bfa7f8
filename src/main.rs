//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use dino_dash::consts::*;
    use dino_dash::persistence::LocalStorage;
    use dino_dash::platform::input::action_for_touch;
    use dino_dash::platform::time::PerformanceClock;
    use dino_dash::platform::{Clock, InputAction, action_for_key};
    use dino_dash::renderer::{RenderState, build_frame};
    use dino_dash::ui::Hud;
    use dino_dash::{Game, Tuning};

    /// HUD bound to the page's score elements
    struct DomHud {
        score: Option<Element>,
        high_score: Option<Element>,
        game_over: Option<Element>,
    }

    impl DomHud {
        fn new(document: &web_sys::Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                high_score: document.get_element_by_id("high-score"),
                game_over: document.get_element_by_id("game-over-screen"),
            }
        }
    }

    impl Hud for DomHud {
        fn show_score(&mut self, score: u64) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        fn show_high_score(&mut self, high_score: u64) {
            if let Some(el) = &self.high_score {
                el.set_text_content(Some(&high_score.to_string()));
            }
        }

        fn show_game_over(&mut self, visible: bool) {
            if let Some(el) = &self.game_over {
                let classes = el.class_list();
                let _ = if visible {
                    classes.remove_1("hidden")
                } else {
                    classes.add_1("hidden")
                };
            }
        }
    }

    /// Everything the browser callbacks share
    struct App {
        game: Game<LocalStorage, DomHud>,
        render_state: Option<RenderState>,
        clock: PerformanceClock,
    }

    impl App {
        fn now(&self) -> f64 {
            self.clock.now_ms()
        }

        fn handle(&mut self, action: InputAction) {
            match action {
                InputAction::Jump => {
                    self.game.jump();
                }
                InputAction::Restart => {
                    let now = self.now();
                    self.game.restart(now);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_frame(self.game.state());
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed backing size; CSS scales it
        let width = WORLD_WIDTH as u32;
        let height = WORLD_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let app = Rc::new(RefCell::new(App {
            game: Game::new(tuning, seed, LocalStorage, DomHud::new(&document)),
            render_state: None,
            clock: PerformanceClock,
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("No GPU device, running without rendering: {}", e),
        }

        setup_input_handlers(app.clone());
        setup_restart_button(app.clone());

        // Nothing to decode, so assets are ready once the GPU is
        {
            let mut a = app.borrow_mut();
            let now = a.now();
            a.game.assets_ready(now);
        }

        request_animation_frame(app);

        log::info!("Dino Dash running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.code()) {
                    event.prevent_default();
                    app.borrow_mut().handle(action);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().handle(action_for_touch());
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().handle(InputAction::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let now = a.now();
            let outcome = a.game.update(now);
            if outcome.frames > 0 {
                a.render();
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_dash::consts::FRAME_PERIOD_MS;
    use dino_dash::persistence::JsonFileStorage;
    use dino_dash::platform::time::SystemClock;
    use dino_dash::platform::{Clock, ManualClock};
    use dino_dash::sim::GamePhase;
    use dino_dash::sim::autopilot::should_jump;
    use dino_dash::ui::LogHud;
    use dino_dash::{Game, Tuning};

    env_logger::init();
    log::info!("Dino Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot game - run with `trunk serve` for the web version");

    let tuning = Tuning::load();
    let seed = std::env::var("DINO_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });
    let save_path = std::env::var("DINO_SAVE").unwrap_or_else(|_| "dino_dash_save.json".to_string());
    let max_seconds: f64 = std::env::var("DINO_RUN_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(120.0);

    // DINO_REALTIME paces the run against the wall clock instead of
    // simulating time as fast as possible
    let realtime = std::env::var_os("DINO_REALTIME").is_some();
    let manual = ManualClock::new(0.0);
    let system = SystemClock::new();
    let clock: &dyn Clock = if realtime { &system } else { &manual };

    let mut game = Game::new(tuning, seed, JsonFileStorage::new(save_path), LogHud::default());
    game.assets_ready(clock.now_ms());

    while game.phase() == GamePhase::Running && clock.now_ms() < max_seconds * 1000.0 {
        if realtime {
            std::thread::sleep(std::time::Duration::from_secs_f64(FRAME_PERIOD_MS / 1000.0));
        } else {
            manual.advance(FRAME_PERIOD_MS);
        }
        if should_jump(game.state()) {
            game.jump();
        }
        game.update(clock.now_ms());
    }

    log::info!(
        "Run finished after {:.1}s: score {}, speed {}, high score {}",
        clock.now_ms() / 1000.0,
        game.state().score,
        game.state().speed,
        game.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
