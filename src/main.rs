//! Starfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use starfall::platform::map_to_logical;
    use starfall::renderer::{Hud, RenderState};
    use starfall::{App, BestScore, QualityPreset, SetupError, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        app: App,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
        document: Document,
        /// Last HUD written to the DOM, to skip redundant updates
        last_hud: Option<Hud>,
    }

    impl Game {
        /// Render the current frame
        fn frame(&mut self, time: f64) {
            let frame = self.app.frame(time);
            match self.render_state.render(&frame.vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            if self.last_hud.as_ref() != Some(&frame.hud) {
                self.update_hud(&frame.hud);
                self.last_hud = Some(frame.hud);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, hud: &Hud) {
            if let Some(el) = self.document.get_element_by_id("hud") {
                el.set_text_content(Some(&hud.lines().join("\n")));
            }
        }

        fn pointer(&mut self, offset_x: f32) {
            let width = self.canvas.client_width() as f32;
            self.app.input.pointer(map_to_logical(offset_x, width));
        }
    }

    /// Replace the page with a static notice; the frame loop is not started
    fn show_setup_error(error: &SetupError) {
        log::error!("Setup failed: {}", error);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("error") {
            el.set_text_content(Some(&format!("Starfall could not start: {}", error)));
            let _ = el.set_attribute("class", "");
        }
        if let Some(el) = document.get_element_by_id("loading") {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Starfall starting...");

        match setup().await {
            Ok(game) => {
                request_animation_frame(game);
                log::info!("Starfall running!");
            }
            Err(e) => show_setup_error(&e),
        }
    }

    async fn setup() -> Result<Rc<RefCell<Game>>, SetupError> {
        let window = web_sys::window().ok_or(SetupError::Environment("no window"))?;
        let document = window
            .document()
            .ok_or(SetupError::Environment("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(SetupError::Environment("no #canvas element"))?
            .dyn_into()
            .map_err(|_| SetupError::Environment("#canvas is not a canvas"))?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Optional balance overrides embedded in the page
        let tuning = match document.get_element_by_id("tuning").and_then(|el| el.text_content()) {
            Some(json) if !json.trim().is_empty() => Tuning::from_json(&json)?,
            _ => Tuning::default(),
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SetupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| SetupError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let seed = js_sys::Date::now() as u64;
        let mut app = App::new(seed, tuning, Settings::load(), BestScore::load());
        log::info!("Game initialized with seed: {}", seed);

        // `?quality=low|medium|high` overrides the stored preset
        if let Some(quality) = window
            .location()
            .search()
            .ok()
            .and_then(|query| QualityPreset::from_query(&query))
        {
            app.set_quality(quality);
        }

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let game = Rc::new(RefCell::new(Game {
            app,
            render_state,
            canvas: canvas.clone(),
            document,
            last_hud: None,
        }));

        setup_input_handlers(&canvas, game.clone());
        Ok(game)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - latest position only
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - start / restart
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().app.press_action();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().pointer(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (start / restart, and jump the player to the finger)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.app.press_action();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    g.pointer(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Enter" => game.borrow_mut().app.press_action(),
                    "q" | "Q" => {
                        game.borrow_mut().app.cycle_quality();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulated session length for the headless runner
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: u32 = 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Starfall (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    match run_headless(std::env::args().skip(1).collect()) {
        Ok(summary) => {
            println!(
                "score {} | survived {}s | level {}",
                summary.score,
                summary.survival_secs,
                summary.level + 1
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("starfall: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// `starfall [seed] [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(args: Vec<String>) -> Result<starfall::sim::SessionSummary, starfall::SetupError> {
    use starfall::consts::SIM_DT_MS;
    use starfall::sim::{GamePhase, SessionSummary, autopilot};
    use starfall::{App, BestScore, SetupError, Settings, Tuning};

    let seed = args
        .first()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);

    let tuning = match args.get(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
                path: path.clone(),
                source,
            })?;
            Tuning::from_json(&json)?
        }
        None => Tuning::default(),
    };

    let mut app = App::new(seed, tuning, Settings::load(), BestScore::load());
    log::info!("Game initialized with seed: {}", seed);

    app.press_action();
    let total_frames = HEADLESS_SECONDS as f64 * 1000.0 / SIM_DT_MS as f64;
    for i in 0..total_frames as u64 {
        if let Some(x) = autopilot::target_x(&app.state) {
            app.input.pointer(x);
        }
        app.frame(i as f64 * SIM_DT_MS as f64);
        if app.state.phase == GamePhase::GameOver {
            break;
        }
    }

    Ok(app.state.summary.unwrap_or(SessionSummary {
        score: app.state.score,
        survival_secs: app.state.survival_secs(),
        level: app.state.difficulty.level,
    }))
}
