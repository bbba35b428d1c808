//! The two injected toolbar controls.

use std::rc::Rc;

use promptlist_core::ToggleState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::app::App;
use crate::tooltip::Tooltip;
use crate::{dom, theme};

/// A registered control: the button in the host toolbar plus its tooltip
/// surfaces and the closures backing its listeners. Dropping a `Control`
/// drops the closures; `discard` also removes the tooltip from the body.
pub struct Control {
    pub button: HtmlElement,
    pub tooltip: Rc<Tooltip>,
    _listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl Control {
    /// Tears down the off-toolbar surfaces. The button itself is left to
    /// the host page, which already discarded its container.
    pub fn discard(self) {
        self.tooltip.destroy();
    }
}

fn make_button(doc: &Document, id: &str, icon_svg: &str) -> Option<HtmlElement> {
    let button = doc
        .create_element("button")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    button.set_id(id);
    button.set_inner_html(&icon_span(icon_svg));
    let _ = button.set_attribute("type", "button");
    for class in theme::BUTTON_COMMON_CLASSES {
        let _ = button.class_list().add_1(class);
    }
    dom::set_style(&button, "opacity", "1");
    dom::set_style(&button, "width", "40px");
    dom::set_style(&button, "height", "40px");
    Some(button)
}

fn icon_span(icon_svg: &str) -> String {
    format!(r#"<span style="opacity: 1; transform: none;">{icon_svg}</span>"#)
}

/// Creates the prompt-list control as the container's first child.
pub fn create_prompt_list_control(
    app: &Rc<App>,
    doc: &Document,
    container: &Element,
) -> Option<Control> {
    let button = make_button(doc, theme::PROMPT_LIST_BUTTON_ID, theme::PROMPT_LIST_ICON_SVG)?;
    let _ = button.class_list().add_1("focus:bg-button-ghost-hover");
    let tooltip = Rc::new(Tooltip::attach(
        doc,
        &button,
        theme::PROMPT_LIST_TOOLTIP,
        None,
        app.settings.tooltip_gap_px,
    )?);

    let on_click = {
        let app = Rc::clone(app);
        let button = button.clone();
        let tooltip = Rc::clone(&tooltip);
        Closure::wrap(Box::new(move |e: MouseEvent| {
            e.stop_propagation();
            tooltip.dismiss();
            if let Some(doc) = dom::document() {
                app.dropdown.toggle(&doc, &button);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

    container
        .insert_before(&button, container.first_child().as_ref())
        .ok()?;
    log::debug!("prompt-list control created");
    Some(Control {
        button,
        tooltip,
        _listeners: vec![on_click],
    })
}

/// Creates the section-toggle control right after the prompt-list control
/// (or appended when that control is absent).
pub fn create_section_toggle_control(
    app: &Rc<App>,
    doc: &Document,
    container: &Element,
) -> Option<Control> {
    let (icon, tip) = theme::toggle_appearance(app.toggle_state.get());
    let button = make_button(doc, theme::SECTION_TOGGLE_BUTTON_ID, icon)?;
    let tooltip = Rc::new(Tooltip::attach(
        doc,
        &button,
        tip,
        Some(theme::TOGGLE_TOOLTIP_WRAPPER_ID),
        app.settings.tooltip_gap_px,
    )?);

    let on_click = {
        let app = Rc::clone(app);
        let tooltip = Rc::clone(&tooltip);
        Closure::wrap(Box::new(move |e: MouseEvent| {
            e.stop_propagation();
            tooltip.dismiss();
            run_bulk_toggle(&app);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

    let inserted = dom::by_id(doc, theme::PROMPT_LIST_BUTTON_ID)
        .and_then(|prompt| {
            container
                .insert_before(&button, prompt.next_sibling().as_ref())
                .ok()
        })
        .is_some();
    if !inserted {
        container.append_child(&button).ok()?;
    }
    log::debug!("section-toggle control created");
    Some(Control {
        button,
        tooltip,
        _listeners: vec![on_click],
    })
}

/// One activation of the toggle control: broadcast a click to every
/// visible affordance matching the current state, then flip. The flip
/// happens even with zero matches; the state tracks the next offered
/// action, not actual section state.
pub fn run_bulk_toggle(app: &App) {
    let Some(doc) = dom::document() else {
        return;
    };
    let state = app.toggle_state.get();
    let selector = match state {
        ToggleState::Collapse => &app.settings.collapse_button_selector,
        ToggleState::Expand => &app.settings.expand_button_selector,
    };
    let mut activated = 0usize;
    for el in dom::query_all(&doc, selector) {
        if dom::is_visible(&el) {
            if let Some(button) = el.dyn_ref::<HtmlElement>() {
                button.click();
                activated += 1;
            }
        }
    }
    let next = state.flipped();
    app.toggle_state.set(next);
    apply_toggle_appearance(app, next);
    log::debug!("bulk {state:?} activated {activated} section controls");
}

/// Reflects `state` in the control's icon, title, and tooltip copy.
pub fn apply_toggle_appearance(app: &App, state: ToggleState) {
    if let Some(control) = app.toggle_control.borrow().as_ref() {
        let (icon, tip) = theme::toggle_appearance(state);
        control.button.set_inner_html(&icon_span(icon));
        control.tooltip.set_content(tip);
    }
}

/// A fresh route starts with every section expanded, so the next useful
/// action is collapse.
pub fn reset_toggle(app: &App) {
    app.toggle_state.set(ToggleState::Collapse);
    apply_toggle_appearance(app, ToggleState::Collapse);
    log::debug!("section toggle reset to collapse");
}
