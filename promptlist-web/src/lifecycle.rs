//! UI injection and liveness loop.
//!
//! The host router is not ours, so no single signal is reliable: a body
//! mutation observer catches re-mounts, patched `pushState`/`replaceState`
//! catch programmatic navigation, `popstate` catches back/forward, and a
//! 1-second poll catches whatever the rest missed. All four funnel into
//! the same idempotent re-check, which tolerates running many times per
//! second.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::{Function, Object, Reflect};
use promptlist_core::route_matches;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MutationObserver, MutationObserverInit};

use crate::app::App;
use crate::{buttons, dom};

/// Wires all trigger sources and runs the initial re-check.
pub fn start(app: Rc<App>) {
    recheck(&app);

    if let Some(window) = dom::window() {
        let on_pop = {
            let app = Rc::clone(&app);
            Closure::wrap(Box::new(move || handle_url_change(&app)) as Box<dyn FnMut()>)
        };
        let _ = window
            .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
        // Page-lifetime hook.
        on_pop.forget();
    }

    patch_history(&app, "pushState");
    patch_history(&app, "replaceState");

    if let Some(doc) = dom::document() {
        let on_mutation = {
            let app = Rc::clone(&app);
            Closure::wrap(Box::new(move || recheck(&app)) as Box<dyn FnMut()>)
        };
        if let Ok(observer) = MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
            let init = MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            if let Some(body) = doc.body() {
                let _ = observer.observe_with_options(&body, &init);
            }
        }
        on_mutation.forget();
    }

    let poll = {
        let app = Rc::clone(&app);
        Interval::new(app.settings.poll_interval_ms, move || {
            handle_url_change(&app)
        })
    };
    poll.forget();
}

/// Wraps a history navigation entry point so SPA navigations the router
/// performs programmatically are observed. The original function still
/// runs first.
fn patch_history(app: &Rc<App>, method: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let history: Object = history.unchecked_into();
    let Some(original) = Reflect::get(&history, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };

    let hook = {
        let app = Rc::clone(app);
        let history = history.clone();
        Closure::wrap(Box::new(move |state: JsValue, title: JsValue, url: JsValue| {
            let _ = original.call3(&history, &state, &title, &url);
            handle_url_change(&app);
        }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>)
    };
    let _ = Reflect::set(&history, &JsValue::from_str(method), hook.as_ref());
    // The patch lives as long as the page.
    hook.forget();
}

/// URL-change detector shared by the history hooks, popstate, and the
/// poll. On a change the toggle state also resets, since the new route
/// renders with all sections expanded.
pub fn handle_url_change(app: &Rc<App>) {
    let Some(url) = dom::current_url() else {
        return;
    };
    let changed = {
        let mut last = app.last_url.borrow_mut();
        if *last == url {
            false
        } else {
            log::info!("url changed to {url}");
            *last = url;
            true
        }
    };
    if changed {
        recheck(app);
        buttons::reset_toggle(app);
    }
}

/// Idempotent re-check: prune registrations whose button the host page
/// discarded, hide on non-matching routes, and (re)create missing
/// controls once the toolbar container is mounted.
pub fn recheck(app: &Rc<App>) {
    let Some(doc) = dom::document() else {
        return;
    };

    prune_stale(app);

    let path = dom::current_path().unwrap_or_default();
    if !route_matches(&path, &app.settings.route_prefixes) {
        set_controls_visible(app, false);
        return;
    }
    set_controls_visible(app, true);

    let Some(container) = dom::query(&doc, &app.settings.button_container_selector) else {
        // Container not yet mounted; a later trigger will retry.
        return;
    };

    if app.prompt_control.borrow().is_none() {
        let control = buttons::create_prompt_list_control(app, &doc, &container);
        *app.prompt_control.borrow_mut() = control;
    }
    if app.toggle_control.borrow().is_none() {
        let control = buttons::create_section_toggle_control(app, &doc, &container);
        *app.toggle_control.borrow_mut() = control;
    }
}

// A remounted container leaves registered buttons disconnected; discard
// them (tooltips included) so the next pass rebuilds.
fn prune_stale(app: &App) {
    for slot in [&app.prompt_control, &app.toggle_control] {
        let stale = slot
            .borrow()
            .as_ref()
            .map(|c| !c.button.is_connected())
            .unwrap_or(false);
        if stale {
            if let Some(control) = slot.borrow_mut().take() {
                control.discard();
            }
            log::debug!("discarded stale control registration");
        }
    }
}

fn set_controls_visible(app: &App, visible: bool) {
    for slot in [&app.prompt_control, &app.toggle_control] {
        if let Some(control) = slot.borrow().as_ref() {
            if visible {
                dom::show(&control.button);
            } else {
                dom::hide(&control.button);
            }
        }
    }
    if !visible {
        app.dropdown.close();
    }
}
