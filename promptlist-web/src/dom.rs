//! Thin, non-throwing wrappers over the web-sys surface.
//!
//! The host page owns the DOM and can change it at any time, so every
//! lookup returns `Option` and callers short-circuit on `None`.

use promptlist_core::{Point, Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

/// Rendered-box visibility test: an element hidden via `display: none` or
/// detached from the document has no offset parent.
pub fn is_visible(el: &Element) -> bool {
    el.dyn_ref::<HtmlElement>()
        .map(|h| h.offset_parent().is_some())
        .unwrap_or(false)
}

pub fn current_url() -> Option<String> {
    window()?.location().href().ok()
}

pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

pub fn viewport() -> Viewport {
    let (width, height) = window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0));
    Viewport { width, height }
}

pub fn page_scroll() -> Point {
    window()
        .map(|w| Point {
            x: w.scroll_x().unwrap_or(0.0),
            y: w.scroll_y().unwrap_or(0.0),
        })
        .unwrap_or(Point { x: 0.0, y: 0.0 })
}

pub fn is_touch_device() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(w.as_ref(), &"ontouchstart".into()).unwrap_or(false))
        .unwrap_or(false)
}

pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        let _ = h.style().set_property(property, value);
    }
}

pub fn style_value(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|h| h.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn show(el: &Element) {
    set_style(el, "display", "");
}

pub fn hide(el: &Element) {
    set_style(el, "display", "none");
}
