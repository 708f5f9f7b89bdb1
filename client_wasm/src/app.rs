//! Browser entry point: canvas lookup, pointer wiring and the frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{render, Config, Game, GameRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::batch::QuadBatch;
use crate::input;
use crate::renderer::Renderer;
use crate::CANVAS_ID;

/// Game instance holding all state
struct App {
    game: Game,
    renderer: Renderer,
    batch: QuadBatch,
}

impl App {
    /// Simulate one frame, then paint it
    fn frame(&mut self) {
        self.game.step();

        self.batch.clear();
        render(&self.game.snapshot(), &self.game.config, &mut self.batch);

        if let Err(e) = self.renderer.draw(&self.batch) {
            log::warn!("Render error: {}", e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    let canvas = find_canvas(CANVAS_ID)?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = run(canvas).await {
            log::error!("Pong failed to start: {:?}", e);
        }
    });
    Ok(())
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", id)))
}

async fn run(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    // Playfield geometry is read once from the canvas
    let config = Config::with_playfield(canvas.width() as f32, canvas.height() as f32);

    let renderer = Renderer::new(canvas.clone())
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    log::info!("Canvas {}x{}", renderer.size.0, renderer.size.1);

    let app = Rc::new(RefCell::new(App {
        game: Game::new(config, GameRng::from_entropy()),
        renderer,
        batch: QuadBatch::new(),
    }));

    install_pointer(&canvas, app.clone())?;
    request_animation_frame(app);

    log::info!("Pong running");
    Ok(())
}

/// Mouse move writes the human paddle directly; no buffering
fn install_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let y = input::pointer_y(&event, &target);
        app.borrow_mut().game.point_at(y);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Schedule the next frame only after this one has finished
fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame loop stopped");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        app.borrow_mut().frame();
        request_animation_frame(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}
