//! The shared prompt-list dropdown panel.
//!
//! One panel exists for the page's lifetime, appended to the body at
//! launch and re-owned by whichever control last toggled it. Items are
//! rebuilt from the live DOM on every open and discarded on close.

use std::cell::RefCell;
use std::rc::Rc;

use promptlist_core::{dropdown_position, Settings};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Node};

use crate::messages::{self, MessageRecord};
use crate::{dom, scroll, theme};

pub struct Dropdown {
    element: Element,
    settings: Rc<Settings>,
    // Rebuilt per open; dropping an old closure detaches nothing, but the
    // nodes holding the old listeners were cleared with innerHTML.
    item_listeners: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>,
    _stop_propagation: Closure<dyn FnMut(MouseEvent)>,
    _outside_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Dropdown {
    /// Creates the singleton panel and its two click listeners: one on the
    /// panel that stops propagation, one on the document that closes the
    /// panel for any click the panel did not swallow.
    pub fn new(doc: &Document, settings: Rc<Settings>) -> Option<Self> {
        let element = doc.create_element("div").ok()?;
        element.set_id(theme::DROPDOWN_ID);
        element.set_class_name(theme::DROPDOWN_CLASSES);
        dom::set_style(&element, "position", "absolute");
        dom::hide(&element);
        doc.body()?.append_child(&element).ok()?;

        let stop_propagation =
            Closure::wrap(Box::new(move |e: MouseEvent| e.stop_propagation())
                as Box<dyn FnMut(MouseEvent)>);
        let _ = element.add_event_listener_with_callback(
            "click",
            stop_propagation.as_ref().unchecked_ref(),
        );

        let outside_click = {
            let element = element.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if dom::style_value(&element, "display") != "block" {
                    return;
                }
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = target
                    .as_ref()
                    .map(|n| element.contains(Some(n)))
                    .unwrap_or(false);
                if !inside {
                    dom::hide(&element);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = doc
            .add_event_listener_with_callback("click", outside_click.as_ref().unchecked_ref());

        Some(Self {
            element,
            settings,
            item_listeners: RefCell::new(Vec::new()),
            _stop_propagation: stop_propagation,
            _outside_click: outside_click,
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_open(&self) -> bool {
        dom::style_value(&self.element, "display") == "block"
    }

    pub fn close(&self) {
        dom::hide(&self.element);
    }

    /// Open if closed, close if open. Opening repopulates from the current
    /// message set and positions the panel under `anchor`. An empty
    /// message set still yields a positioned, open panel.
    pub fn toggle(&self, doc: &Document, anchor: &Element) {
        if self.is_open() {
            self.close();
            return;
        }

        self.element.set_inner_html("");
        self.item_listeners.borrow_mut().clear();

        let records = messages::collect(doc, &self.settings);
        log::debug!("dropdown opening with {} messages", records.len());
        for record in records {
            self.append_item(doc, record);
        }

        // Show left-aligned first, then re-measure: the final position
        // depends on the panel's rendered width.
        let anchor_rect = dom::client_rect(anchor);
        let page_scroll = dom::page_scroll();
        dom::set_style(
            &self.element,
            "top",
            &format!("{}px", anchor_rect.bottom() + page_scroll.y),
        );
        dom::set_style(
            &self.element,
            "left",
            &format!("{}px", anchor_rect.left + page_scroll.x),
        );
        dom::set_style(&self.element, "display", "block");

        let panel_rect = dom::client_rect(&self.element);
        let viewport = dom::viewport();
        let mobile = viewport.width < self.settings.mobile_breakpoint_px || dom::is_touch_device();
        let pos = dropdown_position(
            &anchor_rect,
            panel_rect.width,
            &viewport,
            page_scroll,
            mobile,
            self.settings.edge_margin_px,
        );
        dom::set_style(&self.element, "top", &format!("{}px", pos.y));
        dom::set_style(&self.element, "left", &format!("{}px", pos.x));
    }

    fn append_item(&self, doc: &Document, record: MessageRecord) {
        let Ok(item) = doc.create_element("div") else {
            return;
        };
        item.set_class_name(theme::DROPDOWN_ITEM_CLASSES);
        dom::set_style(&item, "display", "flex");
        dom::set_style(&item, "justify-content", "space-between");
        dom::set_style(&item, "align-items", "center");

        let Ok(preview_span) = doc.create_element("span") else {
            return;
        };
        preview_span.set_text_content(Some(&record.preview_text));
        dom::set_style(&preview_span, "width", "190px");
        dom::set_style(&preview_span, "white-space", "nowrap");
        dom::set_style(&preview_span, "overflow", "hidden");
        // Right-edge fade instead of a hard clip.
        let mask = "linear-gradient(to right, black 170px, transparent 190px)";
        dom::set_style(&preview_span, "-webkit-mask-image", mask);
        dom::set_style(&preview_span, "mask-image", mask);
        let _ = item.append_child(&preview_span);

        let mut listeners = self.item_listeners.borrow_mut();

        if let Some(response) = record.response {
            if let Some(answer_button) = self.build_answer_button(doc, response, &mut listeners) {
                let _ = item.append_child(&answer_button);
            }
        }

        let on_click = {
            let settings = Rc::clone(&self.settings);
            let element = self.element.clone();
            let message = record.element.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                if let Some(doc) = dom::document() {
                    let offset = scroll::scroll_offset(&settings);
                    scroll::scroll_with_offset(&doc, &settings, &message, offset);
                }
                dom::hide(&element);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        listeners.push(on_click);

        let _ = self.element.append_child(&item);
    }

    fn build_answer_button(
        &self,
        doc: &Document,
        response: Element,
        listeners: &mut Vec<Closure<dyn FnMut(MouseEvent)>>,
    ) -> Option<Element> {
        let button = doc
            .create_element("button")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        button.set_inner_html(theme::ANSWER_ICON_SVG);
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", theme::ANSWER_TOOLTIP);
        button.set_title(theme::ANSWER_TOOLTIP);
        dom::set_style(&button, "background", "none");
        dom::set_style(&button, "border", "none");
        dom::set_style(&button, "cursor", "pointer");
        dom::set_style(&button, "padding", "0");
        dom::set_style(&button, "margin-left", "8px");
        dom::set_style(&button, "display", "flex");
        dom::set_style(&button, "align-items", "center");
        dom::set_style(&button, "opacity", "0.6");

        let enter = {
            let button = button.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                dom::set_style(&button, "opacity", "1");
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ =
            button.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        listeners.push(enter);

        let leave = {
            let button = button.clone();
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                dom::set_style(&button, "opacity", "0.6");
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ =
            button.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        listeners.push(leave);

        // stopPropagation keeps the item's own click handler from firing.
        let on_click = {
            let settings = Rc::clone(&self.settings);
            let element = self.element.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                e.stop_propagation();
                if let Some(doc) = dom::document() {
                    let offset = scroll::scroll_offset(&settings);
                    scroll::scroll_with_offset(&doc, &settings, &response, offset);
                }
                dom::hide(&element);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ =
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        listeners.push(on_click);

        Some(button.into())
    }
}
