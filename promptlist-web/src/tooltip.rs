//! Hover tooltips for the injected controls.
//!
//! The markup mimics the host page's own popper-based tooltips: a
//! fixed-position wrapper appended to the body, a content div animated by
//! `data-state`, and a visually-hidden ARIA description span wired to the
//! button. Placement is two-pass: the wrapper is shown invisible first so
//! the tooltip's own size can be measured before the final transform is
//! applied.

use promptlist_core::tooltip_translation;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

const ARIA_SPAN_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("border", "0px"),
    ("width", "1px"),
    ("height", "1px"),
    ("padding", "0px"),
    ("margin", "-1px"),
    ("overflow", "hidden"),
    ("clip", "rect(0px, 0px, 0px, 0px)"),
    ("white-space", "nowrap"),
    ("overflow-wrap", "normal"),
];

const MIRRORED_CSS_VARS: &[&str] = &[
    "--radix-tooltip-content-transform-origin",
    "--radix-tooltip-content-available-width",
    "--radix-tooltip-content-available-height",
    "--radix-tooltip-trigger-width",
    "--radix-tooltip-trigger-height",
];

pub struct Tooltip {
    wrapper: Element,
    tooltip: Element,
    aria_span: Element,
    button: HtmlElement,
    _listeners: Vec<Closure<dyn FnMut()>>,
}

impl Tooltip {
    /// Builds the tooltip surfaces and wires hover behavior onto `button`.
    /// Returns `None` only when the document has no body to append to.
    pub fn attach(
        doc: &Document,
        button: &HtmlElement,
        content: &str,
        wrapper_id: Option<&str>,
        gap: f64,
    ) -> Option<Self> {
        let body = doc.body()?;

        let tooltip_id = format!(
            "radix-{:09x}",
            (js_sys::Math::random() * 68_719_476_736.0) as u64
        );
        let aria_span = doc.create_element("span").ok()?;
        aria_span.set_id(&tooltip_id);
        let _ = aria_span.set_attribute("role", "tooltip");
        for (prop, value) in ARIA_SPAN_STYLES {
            dom::set_style(&aria_span, prop, value);
        }
        aria_span.set_inner_html(&format!("<p>{content}</p>"));

        let tooltip = doc.create_element("div").ok()?;
        let _ = tooltip.set_attribute("data-side", "bottom");
        let _ = tooltip.set_attribute("data-align", "center");
        let _ = tooltip.set_attribute("data-state", "closed");
        tooltip.set_class_name(crate::theme::TOOLTIP_CLASSES);
        tooltip.set_inner_html(&format!("<p>{content}</p>"));
        let _ = tooltip.append_child(&aria_span);

        let wrapper = doc.create_element("div").ok()?;
        if let Some(id) = wrapper_id {
            wrapper.set_id(id);
        }
        let _ = wrapper.set_attribute("data-radix-popper-content-wrapper", "");
        dom::set_style(&wrapper, "position", "fixed");
        dom::set_style(&wrapper, "left", "0px");
        dom::set_style(&wrapper, "top", "0px");
        dom::set_style(&wrapper, "min-width", "max-content");
        dom::set_style(&wrapper, "z-index", "50");
        dom::set_style(&wrapper, "--radix-popper-transform-origin", "50% 0px");
        let _ = wrapper.append_child(&tooltip);
        let _ = body.append_child(&wrapper);
        dom::hide(&wrapper);

        // The host's tooltip CSS reads these through the popper vars.
        for var in MIRRORED_CSS_VARS {
            let popper_var = var.replace("--radix-tooltip-", "--radix-popper-");
            dom::set_style(&tooltip, var, &format!("var({popper_var})"));
        }

        let _ = button.set_attribute("aria-describedby", &tooltip_id);
        button.set_title(content);

        let mut listeners = Vec::new();

        let show = {
            let button = button.clone();
            let tooltip = tooltip.clone();
            let wrapper = wrapper.clone();
            Closure::wrap(Box::new(move || {
                dom::show(&wrapper);
                dom::set_style(&wrapper, "visibility", "hidden");
                let anchor = dom::client_rect(&button);
                let rect = dom::client_rect(&tooltip);
                let t = tooltip_translation(&anchor, rect.width, gap);
                dom::set_style(&wrapper, "transform", &format!("translate({}px, {}px)", t.x, t.y));
                let viewport = dom::viewport();
                dom::set_style(
                    &wrapper,
                    "--radix-popper-available-width",
                    &format!("{}px", viewport.width),
                );
                dom::set_style(
                    &wrapper,
                    "--radix-popper-available-height",
                    &format!("{}px", viewport.height),
                );
                dom::set_style(
                    &wrapper,
                    "--radix-popper-anchor-width",
                    &format!("{}px", anchor.width),
                );
                dom::set_style(
                    &wrapper,
                    "--radix-popper-anchor-height",
                    &format!("{}px", anchor.height),
                );
                dom::set_style(&wrapper, "visibility", "");
                let _ = tooltip.set_attribute("data-state", "active-open");
            }) as Box<dyn FnMut()>)
        };
        let _ = button
            .add_event_listener_with_callback("mouseenter", show.as_ref().unchecked_ref());
        listeners.push(show);

        let leave = {
            let tooltip = tooltip.clone();
            Closure::wrap(Box::new(move || {
                let _ = tooltip.set_attribute("data-state", "closed");
            }) as Box<dyn FnMut()>)
        };
        let _ = button
            .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        listeners.push(leave);

        // Unmount only after the close animation has played out.
        let animation_end = {
            let tooltip = tooltip.clone();
            let wrapper = wrapper.clone();
            Closure::wrap(Box::new(move || {
                if tooltip.get_attribute("data-state").as_deref() == Some("closed") {
                    dom::hide(&wrapper);
                }
            }) as Box<dyn FnMut()>)
        };
        let _ = tooltip
            .add_event_listener_with_callback("animationend", animation_end.as_ref().unchecked_ref());
        listeners.push(animation_end);

        Some(Self {
            wrapper,
            tooltip,
            aria_span,
            button: button.clone(),
            _listeners: listeners,
        })
    }

    /// Immediate dismissal, used when the owning control is clicked.
    pub fn dismiss(&self) {
        let _ = self.tooltip.set_attribute("data-state", "closed");
        dom::hide(&self.wrapper);
    }

    /// Swaps the visible copy, the ARIA description, and the button title
    /// in place. Used by the toggle control when its state flips.
    pub fn set_content(&self, content: &str) {
        if let Ok(Some(p)) = self.tooltip.query_selector("p") {
            p.set_text_content(Some(content));
        }
        self.aria_span.set_inner_html(&format!("<p>{content}</p>"));
        self.button.set_title(content);
    }

    /// Removes the tooltip surfaces from the document. Called when a
    /// container remount invalidates the owning control.
    pub fn destroy(&self) {
        self.wrapper.remove();
    }
}
