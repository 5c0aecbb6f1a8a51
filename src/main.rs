//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use brick_breaker::consts::*;
    use brick_breaker::platform::{KeyValueStore, LocalStorage, MemoryStore};
    use brick_breaker::renderer::CanvasRenderer;
    use brick_breaker::scores::HighScore;
    use brick_breaker::sim::{level, tick, GameEvent, GameState, TickInput};
    use brick_breaker::users;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        input: TickInput,
        store: Box<dyn KeyValueStore>,
        high_score: HighScore,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            // Private browsing can leave us without LocalStorage; play on
            // with a session-only store
            let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
                Some(local) => Box::new(local),
                None => {
                    log::warn!("LocalStorage unavailable, scores will not persist");
                    Box::new(MemoryStore::new())
                }
            };

            let high_score = HighScore::load(&*store);
            let mut state = GameState::new(seed);
            state.high_score = high_score.best;
            state.current_user = users::current_user(&*store);

            Self {
                state,
                renderer: None,
                input: TickInput::default(),
                store,
                high_score,
            }
        }

        /// Run one simulation tick and react to what it raised
        fn update(&mut self) {
            let input = self.input.clone();
            tick(&mut self.state, &input);

            // Clear one-shot inputs after processing
            self.input.press = false;
            self.input.toggle_auto_play = false;

            self.handle_events();
        }

        fn handle_events(&mut self) {
            let events = std::mem::take(&mut self.state.events);
            for event in events {
                match event {
                    GameEvent::HighScore { score } => {
                        self.high_score.update(score, &mut *self.store);
                    }
                    GameEvent::GameOver { score } | GameEvent::GameCompleted { score } => {
                        if let Some(user) = self.state.current_user.clone() {
                            users::record_score(
                                &mut *self.store,
                                &user,
                                score,
                                js_sys::Date::now(),
                            );
                        }
                    }
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                if let Err(e) = renderer.render(&self.state) {
                    log::warn!("render error: {:?}", e);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        {
            let mut g = game.borrow_mut();
            level::load_level(&mut g.state);
            match CanvasRenderer::new(&canvas) {
                Ok(renderer) => g.renderer = Some(renderer),
                Err(e) => log::error!("failed to create renderer: {:?}", e),
            }
        }

        setup_input_handlers(&canvas, game.clone());
        setup_registration_button(game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer move - track x for the paddle (last write wins)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                game.borrow_mut().input.pointer_x = Some(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer down - launch / restart
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().input.press = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard - auto-play toggle
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "a" | "A") {
                    game.borrow_mut().input.toggle_auto_play = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_registration_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        if let Some(btn) = document.get_element_by_id("register-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let game = game.clone();
                let result = brick_breaker::ui::open_registration(move |username| {
                    game.borrow_mut().state.current_user = Some(username);
                });
                if let Err(e) = result {
                    log::error!("failed to open registration form: {:?}", e);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::sim::{level, tick, GamePhase, GameState, TickInput};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless demo: auto-play until the session ends
    let mut state = GameState::new(0xB81C);
    level::load_level(&mut state);

    let mut ticks = 0u64;
    while matches!(state.phase, GamePhase::Serve | GamePhase::Playing) && ticks < 200_000 {
        let input = if state.phase == GamePhase::Serve {
            // Launch, re-arming auto-play after each level advance
            TickInput {
                press: true,
                toggle_auto_play: !state.auto_play,
                ..Default::default()
            }
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    log::info!(
        "auto-play finished after {} ticks: {:?}, score {}, level {}",
        ticks,
        state.phase,
        state.score,
        state.level_index + 1
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
