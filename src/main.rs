//! Parachute Drop entry point
//!
//! Native builds run a headless autopilot: `parachute-drop [rounds] [seed]`.
//! Each round is driven through the same fixed-timestep loop the browser
//! host uses, and the final frame is printed as text. The wasm build draws
//! to a `#canvas` element with the 2D context.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use parachute_drop::audio::LogAudio;
    use parachute_drop::consts::*;
    use parachute_drop::hud::{HudSnapshot, RESTART_HINT};
    use parachute_drop::persistence::JsonFileStore;
    use parachute_drop::platform::{InputLatch, KeyState, clear_one_shots};
    use parachute_drop::renderer::{TextCanvas, draw_round};
    use parachute_drop::sim::RoundState;
    use parachute_drop::{Session, Settings};

    /// Host frame length; two sim ticks per frame
    const FRAME_DT: f32 = 1.0 / 30.0;
    /// Autopilot opens the canopy once the player's top passes this y
    const DEPLOY_Y: f32 = 220.0;
    /// Autopilot stops steering inside this distance of the target
    const STEER_DEADBAND: f32 = 6.0;
    /// Give up on a round that never ends
    const MAX_FRAMES_PER_ROUND: u32 = 10_000;

    const TEXT_COLS: usize = 80;
    const TEXT_ROWS: usize = 30;

    /// Keys a simple bot would hold this frame
    fn autopilot(round: &RoundState) -> KeyState {
        if round.is_over() {
            return KeyState {
                reset: true,
                ..Default::default()
            };
        }
        if !round.is_jumping() {
            return KeyState::default();
        }

        let player = &round.player;
        let center = player.center_x();
        let target = round
            .landing_zones
            .iter()
            .map(|zone| zone.x + zone.width / 2.0)
            .min_by(|a, b| (a - center).abs().total_cmp(&(b - center).abs()))
            .unwrap_or(center);

        KeyState {
            left: target < center - STEER_DEADBAND,
            right: target > center + STEER_DEADBAND,
            deploy: player.pos.y >= DEPLOY_Y,
            reset: false,
        }
    }

    fn print_round(session: &Session) {
        let round = session.round();
        let mut canvas = TextCanvas::new(TEXT_COLS, TEXT_ROWS, round.world_width, WORLD_HEIGHT);
        draw_round(round, &mut canvas);
        println!("{}", canvas.render());

        let hud = HudSnapshot::new(round, session.high_scores());
        println!("Wind: {}  Altitude: {}  Status: {}", hud.wind, hud.altitude, hud.status.as_str());
        if let Some(banner) = hud.banner {
            println!("{banner}");
        }
        if let Some(score) = &hud.score {
            println!("{score}");
        }
        if let Some(rank) = session.last_rank() {
            println!("New high score! Rank #{rank}");
        }
        if !hud.high_scores.is_empty() {
            println!("High Scores:");
            for line in &hud.high_scores {
                println!("  {line}");
            }
        }
        println!("{RESTART_HINT}\n");
    }

    fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str) -> Option<T> {
        let arg = arg?;
        match arg.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid {name} argument: {arg}");
                None
            }
        }
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let rounds: u32 = parse_arg(args.next(), "rounds").unwrap_or(1);
        let seed: u64 = parse_arg(args.next(), "seed").unwrap_or_else(rand::random);

        let settings = Settings::load();
        let store = JsonFileStore::new(&settings.high_score_path);
        log::info!(
            "Playing {rounds} round(s) with seed {seed}, scores in {}",
            store.path().display()
        );

        let mut session = Session::new(seed, Box::new(store));
        let mut audio = LogAudio {
            muted: settings.effective_volume() <= 0.0,
            ..Default::default()
        };
        let mut latch = InputLatch::new();
        let mut accumulator = 0.0;

        for round_index in 1..=rounds {
            println!("=== Round {round_index} (seed {}) ===", session.round().seed);
            let mut frames = 0;

            loop {
                let keys = autopilot(session.round());
                // Round just finished: the reset press belongs to the next round
                if keys.reset && frames > 0 {
                    break;
                }
                let mut input = latch.sample(keys);

                accumulator += FRAME_DT;
                let mut substeps = 0;
                while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                    session.step(&input, &mut audio);
                    clear_one_shots(&mut input);
                    accumulator -= SIM_DT;
                    substeps += 1;
                }

                frames += 1;
                if frames >= MAX_FRAMES_PER_ROUND {
                    log::warn!("Round {round_index} did not finish, moving on");
                    break;
                }
            }

            print_round(&session);
        }

        log::info!("Sounds played: {}", audio.played.len());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Parachute Drop (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use parachute_drop::audio::WebAudio;
    use parachute_drop::consts::*;
    use parachute_drop::persistence::LocalStorageStore;
    use parachute_drop::platform::{InputLatch, KeyState, clear_one_shots};
    use parachute_drop::renderer::{Canvas2d, Effects, draw_round};
    use parachute_drop::sim::TickInput;
    use parachute_drop::{Session, Settings};

    /// Browser game instance
    struct Game {
        session: Session,
        settings: Settings,
        audio: WebAudio,
        canvas: Canvas2d,
        effects: Effects,
        size: (f64, f64),
        keys: KeyState,
        latch: InputLatch,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(0.1);

            // One-shots wait for the next tick on frames that run none
            let sampled = self.latch.sample(self.keys);
            self.input.left = sampled.left;
            self.input.right = sampled.right;
            self.input.deploy |= sampled.deploy;
            self.input.reset |= sampled.reset;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = self.session.step(&self.input, &mut self.audio);
                for event in &events {
                    self.effects
                        .on_event(event, self.session.round(), &self.settings);
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
                clear_one_shots(&mut self.input);
            }

            self.effects.update(dt);
        }

        fn render(&mut self) {
            let (w, h) = self.size;
            self.canvas.set_scale(w, WORLD_WIDTH as f64);
            self.canvas.clear(w, h);

            let (dx, dy) = self.effects.shake_offset();
            self.canvas.set_offset(dx, dy);
            let round = self.session.round();
            draw_round(round, &mut self.canvas);
            self.effects
                .draw_wind_streaks(round, &self.settings, &mut self.canvas);
            self.canvas.set_offset(0.0, 0.0);

            self.effects
                .draw_flash(&mut self.canvas, WORLD_WIDTH, WORLD_HEIGHT);
            self.canvas.draw_hud(&self.session.hud(), WORLD_WIDTH as f64);
        }

        /// Map a key to its held flag; returns false for keys we ignore
        fn set_key(&mut self, key: &str, down: bool) -> bool {
            match key {
                "ArrowLeft" | "a" | "A" => self.keys.left = down,
                "ArrowRight" | "d" | "D" => self.keys.right = down,
                " " => self.keys.deploy = down,
                "r" | "R" => self.keys.reset = down,
                _ => return false,
            }
            if down {
                // Browsers only allow audio after a user gesture
                self.audio.resume();
            }
            true
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Parachute Drop starting...");

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let scale = canvas.client_width() as f64 / WORLD_WIDTH as f64;
        let width = (WORLD_WIDTH as f64 * scale).max(1.0);
        let height = (WORLD_HEIGHT as f64 * scale).max(1.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let mut audio = WebAudio::new();
        audio.set_volume(settings.effective_volume());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, Box::new(LocalStorageStore::default())),
            settings,
            audio,
            canvas: Canvas2d::new(ctx),
            effects: Effects::new(seed),
            size: (width, height),
            keys: KeyState::default(),
            latch: InputLatch::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: 0.0,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(&window, game.clone());
        request_animation_frame(game);
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        for (name, down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().set_key(&event.key(), down) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
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

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
