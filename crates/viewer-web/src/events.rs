//! Event wiring: double-click picking, modal dragging, file selection and
//! the toolbar buttons. All listeners are installed once at startup.

use crate::{dom, frame, modal, ViewerSession};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::constants::MODEL_FILE_EXTENSION;
use viewer_core::{camera_ray, pick, screen_to_ndc, DragSession, ViewerError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Convert a mouse event's client position to canvas backing-store pixels.
#[inline]
fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Double-click anywhere: cast a ray at the model and open the inspection
/// modal on the nearest surface point.
pub fn wire_double_click(session: &ViewerSession, document: &web::Document) {
    let session = session.clone();
    let document = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let model_slot = session.model.borrow();
        let Some(model) = model_slot.as_ref() else {
            log::error!("{}", ViewerError::NoModel);
            return;
        };

        let pos = mouse_canvas_px(&ev, &session.canvas);
        let ndc = screen_to_ndc(
            pos.x,
            pos.y,
            session.canvas.width() as f32,
            session.canvas.height() as f32,
        );
        let (origin, dir) = camera_ray(&session.camera.borrow(), ndc);

        match pick(model, origin, dir) {
            Some(hit) => {
                log::info!(
                    "picked node {} at ({:.2}, {:.2}, {:.2}) t={:.2}",
                    hit.node,
                    hit.point.x,
                    hit.point.y,
                    hit.point.z,
                    hit.distance
                );
                modal::open_with_hit(&document, &hit);
            }
            // Empty space: the modal keeps whatever state it had
            None => log::info!("no surface under the cursor"),
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Make the modal follow the pointer between press and release.
///
/// Press is scoped to the modal, but move and release listeners live on the
/// window: a fast drag can leave the panel's bounds between two events and
/// the gesture must survive that.
pub fn wire_modal_drag(document: &web::Document) {
    let Some(panel) = dom::html_element(document, modal::MODAL_ID) else {
        return;
    };
    let drag = Rc::new(RefCell::new(DragSession::default()));

    // pointerdown on the panel
    {
        let drag = drag.clone();
        let panel_down = panel.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            drag.borrow_mut().begin(pointer, modal::origin(&panel_down));
        }) as Box<dyn FnMut(_)>);
        let _ =
            panel.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove on the window
    {
        let drag = drag.clone();
        let panel_move = panel.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            if let Some(pos) = drag.borrow().track(pointer) {
                modal::set_origin(&panel_move, pos);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup anywhere ends the gesture
    {
        let drag = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// File selection: validate the extension, then decode and swap the model.
pub fn wire_file_input(session: &ViewerSession, document: &web::Document) {
    let Some(input_el) = document.get_element_by_id("file-input") else {
        log::error!("missing #file-input");
        return;
    };

    let session = session.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        if !file.name().ends_with(MODEL_FILE_EXTENSION) {
            log::warn!("{}", ViewerError::UnsupportedFile(file.name()));
            if let Some(wnd) = web::window() {
                let _ = wnd.alert_with_message("Please choose a .glb model file");
            }
            return;
        }

        let session = session.clone();
        spawn_local(async move {
            if let Err(e) = load_model_file(&session, file).await {
                // A failed load leaves any previously loaded model in place
                log::error!("model load failed: {:?}", e);
            }
        });
    }) as Box<dyn FnMut(_)>);
    let _ = input_el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Read, decode and install a model file, starting the render loop on the
/// first success. A second selection simply replaces the current model.
async fn load_model_file(session: &ViewerSession, file: web::File) -> anyhow::Result<()> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow::anyhow!("file read error: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let model = viewer_core::loader::decode_glb(&bytes)?;

    if session.gpu.borrow().is_none() {
        *session.gpu.borrow_mut() = frame::init_gpu(&session.canvas).await;
    }
    if let Some(gpu) = session.gpu.borrow_mut().as_mut() {
        gpu.set_model(&model);
    }
    *session.model.borrow_mut() = Some(model);

    frame::ensure_loop_started(session);
    log::info!("model {:?} loaded", file.name());
    Ok(())
}

/// Toolbar buttons, modal close control and the header file-picker proxy.
pub fn wire_buttons(session: &ViewerSession, document: &web::Document) {
    // Toggle the highlight material on the tagged sub-part
    {
        let session = session.clone();
        dom::add_click_listener(document, "change-material-btn", move || {
            match session.model.borrow_mut().as_mut() {
                Some(model) => {
                    if model.toggle_highlight().is_none() {
                        log::warn!("model has no highlightable sub-part");
                    }
                }
                None => log::error!("{}", ViewerError::NoModel),
            }
        });
    }

    // Show/hide the two auxiliary panels
    {
        let document_props = document.clone();
        dom::add_click_listener(document, "show-properties-btn", move || {
            dom::toggle_visibility(&document_props, "model-properties");
        });
        let document_coords = document.clone();
        dom::add_click_listener(document, "show-coordinates-btn", move || {
            dom::toggle_visibility(&document_coords, "model-coordinates");
        });
    }

    // Close the inspection modal
    {
        let document_close = document.clone();
        dom::add_click_listener(document, "close-btn", move || {
            modal::hide(&document_close);
        });
    }

    // The page header doubles as the file picker
    {
        let document_header = document.clone();
        dom::add_click_listener(document, "header-container", move || {
            if let Some(input) = dom::html_element(&document_header, "file-input") {
                input.click();
            }
        });
    }
}
