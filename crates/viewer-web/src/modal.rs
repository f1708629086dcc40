//! The inspection modal: coordinates of the picked point plus the fixed
//! part properties.

use crate::dom;
use glam::Vec2;
use viewer_core::constants::{PART_DESCRIPTION, PART_DIAMETER, PART_PRESSURE};
use viewer_core::{format_coord, PickHit};
use web_sys as web;

pub const MODAL_ID: &str = "modal";

/// Fill in the picked coordinates and static properties, then show the
/// modal. Reopening while visible just refreshes the values.
pub fn open_with_hit(document: &web::Document, hit: &PickHit) {
    dom::set_text(document, "coord-x", &format_coord(hit.point.x));
    dom::set_text(document, "coord-y", &format_coord(hit.point.y));
    dom::set_text(document, "coord-z", &format_coord(hit.point.z));

    dom::set_text(document, "model-info", PART_DESCRIPTION);
    dom::set_text(document, "diameter", PART_DIAMETER);
    dom::set_text(document, "pressure", PART_PRESSURE);

    if let Some(el) = dom::html_element(document, MODAL_ID) {
        dom::show(&el);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = dom::html_element(document, MODAL_ID) {
        dom::hide(&el);
    }
}

/// Current top-left corner of the modal in page coordinates.
pub fn origin(el: &web::HtmlElement) -> Vec2 {
    Vec2::new(el.offset_left() as f32, el.offset_top() as f32)
}

/// Move the modal so its top-left corner lands on `pos`.
pub fn set_origin(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));
}
