//! Process-wide context and launch wiring.
//!
//! Everything mutable and process-wide (toggle state, last-seen URL, the
//! dropdown singleton, the control registrations) lives in one `Rc`-shared
//! context created at launch and kept alive by the page-lifetime
//! callbacks that capture it. Nothing here is destroyed before page
//! teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use promptlist_core::{Settings, ToggleState};

use crate::buttons::Control;
use crate::dropdown::Dropdown;
use crate::{dom, lifecycle, paste};

pub struct App {
    pub settings: Rc<Settings>,
    pub toggle_state: Cell<ToggleState>,
    pub last_url: RefCell<String>,
    pub dropdown: Dropdown,
    pub prompt_control: RefCell<Option<Control>>,
    pub toggle_control: RefCell<Option<Control>>,
}

thread_local! {
    static LAUNCHED: Cell<bool> = const { Cell::new(false) };
}

/// Builds the context and starts the injection loop and the paste
/// normalizer. Idempotent: repeated calls are ignored so the loader can
/// fire it from multiple hooks without stacking listeners.
pub fn launch(settings: Settings) {
    if LAUNCHED.with(|l| l.replace(true)) {
        log::debug!("launch called again, ignoring");
        return;
    }
    let Some(doc) = dom::document() else {
        log::warn!("no document, not launching");
        return;
    };

    let settings = Rc::new(settings);
    let Some(dropdown) = Dropdown::new(&doc, Rc::clone(&settings)) else {
        log::warn!("document has no body, not launching");
        return;
    };

    let app = Rc::new(App {
        settings: Rc::clone(&settings),
        toggle_state: Cell::new(ToggleState::Collapse),
        last_url: RefCell::new(dom::current_url().unwrap_or_default()),
        dropdown,
        prompt_control: RefCell::new(None),
        toggle_control: RefCell::new(None),
    });

    log::info!(
        "promptlist launched on {}",
        dom::current_path().unwrap_or_default()
    );

    lifecycle::start(Rc::clone(&app));
    paste::start(settings);
}
