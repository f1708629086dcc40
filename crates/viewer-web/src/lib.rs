#![cfg(target_arch = "wasm32")]
//! Browser entry point. Builds the viewer session around the fixed page
//! elements and wires every listener; everything afterwards is event-driven.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use viewer_core::{Camera, Model};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod modal;
mod render;

/// Shared state of the running viewer. Handed to the event closures and the
/// frame loop instead of ambient globals; all mutation happens through
/// single-threaded interior mutability.
#[derive(Clone)]
pub struct ViewerSession {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<Camera>>,
    /// Currently loaded model; a new load replaces the old one.
    pub model: Rc<RefCell<Option<Model>>>,
    pub gpu: Rc<RefCell<Option<render::GpuState>>>,
    pub loop_started: Rc<Cell<bool>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("3d-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #3d-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Fixed initial size; the resize handler takes over afterwards
    dom::set_canvas_size(&canvas, CANVAS_WIDTH, CANVAS_HEIGHT);

    let aspect = dom::window_inner_size()
        .map(|(w, h)| w as f32 / (h as f32).max(1.0))
        .unwrap_or(CANVAS_WIDTH as f32 / CANVAS_HEIGHT as f32);

    let session = ViewerSession {
        canvas: canvas.clone(),
        camera: Rc::new(RefCell::new(Camera::new(aspect))),
        model: Rc::new(RefCell::new(None)),
        gpu: Rc::new(RefCell::new(None)),
        loop_started: Rc::new(Cell::new(false)),
    };

    wire_window_resize(&session);
    events::wire_double_click(&session, &document);
    events::wire_modal_drag(&document);
    events::wire_file_input(&session, &document);
    events::wire_buttons(&session, &document);

    Ok(())
}

/// Track the window size: the canvas backing store follows the window and
/// the camera aspect is recomputed.
fn wire_window_resize(session: &ViewerSession) {
    let session = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some((w, h)) = dom::window_inner_size() {
            dom::set_canvas_size(&session.canvas, w, h);
            session
                .camera
                .borrow_mut()
                .set_aspect(w as f32, h as f32);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
