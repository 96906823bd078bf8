//! Bounce Box entry point
//!
//! On the web: wires the canvas, keyboard and ice button to the world and
//! ticks it once per animation frame. Natively: runs headless and prints the
//! player trajectory as JSON lines.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use bounce_box::Tuning;
    use bounce_box::consts::{ICE_BACKGROUND, NORMAL_BACKGROUND};
    use bounce_box::renderer::{CanvasSurface, WorldPainter};
    use bounce_box::sim::{Key, SurfaceMode, World, tick_observed};

    /// Everything the frame callback touches
    struct App {
        world: World,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl App {
        fn frame(&mut self) {
            let mut painter = WorldPainter::new(&mut self.surface);
            tick_observed(&mut self.world, &mut painter);
        }

        fn toggle_ice(&mut self) {
            let mode = self.world.toggle_surface();
            let background = match mode {
                SurfaceMode::Ice => ICE_BACKGROUND,
                SurfaceMode::Normal => NORMAL_BACKGROUND,
            };
            let _ = self
                .canvas
                .style()
                .set_property("background-color", background);
            log::info!("Surface mode: {}", mode.as_str());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Box starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Sized once; the toy does not follow window resizes
        let viewport = DVec2::new(
            window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .expect("no innerWidth"),
            window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .expect("no innerHeight"),
        );

        let world = match World::with_tuning(viewport, Tuning::load()) {
            Ok(world) => world,
            Err(e) => {
                log::warn!("Falling back to default tuning: {}", e);
                World::new(viewport)
            }
        };
        canvas.set_width(world.bounds.x as u32);
        canvas.set_height(world.bounds.y as u32);

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");

        log::info!(
            "Canvas {}x{}, {} platforms",
            world.bounds.x,
            world.bounds.y,
            world.platforms.len()
        );

        let app = Rc::new(RefCell::new(App {
            world,
            surface,
            canvas,
        }));

        setup_keyboard(app.clone());
        setup_ice_button(app.clone());

        request_animation_frame(app);

        log::info!("Bounce Box running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    app.borrow_mut().world.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    app.borrow_mut().world.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_ice_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");

        let Some(btn) = document.get_element_by_id("ice") else {
            log::warn!("No #ice button; ice mode unavailable");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().toggle_ice();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated when no count is given
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 300;

/// `bounce-box [--draw] [frames] [tuning.json]`
///
/// `--draw` adds the frame's draw calls to every JSON line.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use bounce_box::Tuning;
    use bounce_box::consts::DEFAULT_VIEWPORT;
    use bounce_box::renderer::{RecordingSurface, WorldPainter};
    use bounce_box::sim::{World, tick, tick_observed};

    env_logger::init();
    log::info!("Bounce Box (headless) starting...");

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let draw = flags.iter().any(|f| f == "--draw");

    let mut args = positional.into_iter();
    let frames = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load_file(path)?,
        None => Tuning::default(),
    };

    let mut world = World::with_tuning(DEFAULT_VIEWPORT, tuning)?;
    let mut surface = RecordingSurface::default();
    for _ in 0..frames {
        let mut sample = if draw {
            surface.reset();
            tick_observed(&mut world, &mut WorldPainter::new(&mut surface));
            serde_json::json!({ "draw": &surface.commands })
        } else {
            tick(&mut world);
            serde_json::json!({})
        };
        sample["frame"] = world.frame.into();
        sample["pos"] = serde_json::json!([world.player.pos.x, world.player.pos.y]);
        sample["vel"] = serde_json::json!([world.player.vel.x, world.player.vel.y]);
        println!("{}", sample);
    }

    log::info!(
        "Finished {} frames, player at ({}, {})",
        world.frame,
        world.player.pos.x,
        world.player.pos.y
    );
    Ok(())
}
