//! Continuous redraw loop driven by `requestAnimationFrame`. Started once
//! after the first successful model load and never stopped.

use crate::render::GpuState;
use crate::ViewerSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: ViewerSession,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut gpu_slot = self.session.gpu.borrow_mut();
        let Some(gpu) = gpu_slot.as_mut() else {
            return;
        };

        // Keep the surface sized to the canvas backing store
        gpu.resize_if_needed(self.session.canvas.width(), self.session.canvas.height());

        if let Some(model) = self.session.model.borrow().as_ref() {
            gpu.sync_colors(model);
        }
        if let Err(e) = gpu.render(&self.session.camera.borrow()) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Kick off the self-rescheduling animation frame loop. Call once.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Start the loop exactly once per session, after the first model arrives.
pub fn ensure_loop_started(session: &ViewerSession) {
    if session.loop_started.get() {
        return;
    }
    session.loop_started.set(true);
    start_loop(Rc::new(RefCell::new(FrameContext {
        session: session.clone(),
    })));
}

// GpuState is created lazily with the first load; the canvas stays free for
// other consumers until then.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState> {
    match GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
