use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

#[inline]
pub fn is_hidden(el: &web::HtmlElement) -> bool {
    el.style()
        .get_property_value("display")
        .map(|d| d != "block")
        .unwrap_or(true)
}

#[inline]
pub fn show(el: &web::HtmlElement) {
    let _ = el.style().set_property("display", "block");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

/// Flip an auxiliary panel between shown and hidden.
pub fn toggle_visibility(document: &web::Document, element_id: &str) {
    if let Some(el) = html_element(document, element_id) {
        if is_hidden(&el) {
            show(&el);
            let _ = el.style().set_property("opacity", "1");
        } else {
            hide(&el);
            let _ = el.style().set_property("opacity", "0");
        }
    }
}

/// Size the canvas backing store and keep the camera told about it.
pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}

/// Current window inner size in CSS pixels.
pub fn window_inner_size() -> Option<(u32, u32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as u32;
    let height = w.inner_height().ok()?.as_f64()? as u32;
    Some((width, height))
}
