//! Document-level paste interception.
//!
//! Every paste anywhere in the page is captured, the clipboard is reduced
//! to its plain-text representation, and the text is inserted through
//! whichever API fits the focused target: value splicing for inputs and
//! textareas, the editor command surface inside the rich-text region, and
//! a text-node insertion for any other contenteditable. Each path
//! schedules a deferred trailing-space keystroke so the host editor's
//! reactive formatting settles the same way it would after real typing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use promptlist_core::{normalize_rich_text, splice_value, Settings};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, Document, Element, HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement, MutationObserver, MutationObserverInit};

use crate::dom;
use crate::editor::{self, EditorHandle};

pub struct PasteNormalizer {
    settings: Rc<Settings>,
    // Held reference guarantees a single live document listener no matter
    // how often the safety-net attach hooks fire.
    handler: RefCell<Option<Closure<dyn FnMut(ClipboardEvent)>>>,
    last_url: RefCell<String>,
}

/// Installs the capture-phase paste handler and the navigation watcher
/// that re-probes the editor after route changes.
pub fn start(settings: Rc<Settings>) {
    let normalizer = Rc::new(PasteNormalizer {
        settings,
        handler: RefCell::new(None),
        last_url: RefCell::new(dom::current_url().unwrap_or_default()),
    });
    attach(&normalizer);
    spawn_probe(&normalizer, 0);
    watch(normalizer);
}

fn attach(normalizer: &Rc<PasteNormalizer>) {
    if normalizer.handler.borrow().is_some() {
        return;
    }
    let Some(doc) = dom::document() else {
        return;
    };
    let handler = {
        let settings = Rc::clone(&normalizer.settings);
        Closure::wrap(Box::new(move |event: ClipboardEvent| {
            on_paste(&settings, &event);
        }) as Box<dyn FnMut(ClipboardEvent)>)
    };
    if doc
        .add_event_listener_with_callback_and_bool("paste", handler.as_ref().unchecked_ref(), true)
        .is_ok()
    {
        *normalizer.handler.borrow_mut() = Some(handler);
        log::info!("paste handler installed");
    }
}

fn on_paste(settings: &Rc<Settings>, event: &ClipboardEvent) {
    event.prevent_default();
    let text = event
        .clipboard_data()
        .and_then(|d| d.get_data("text/plain").ok())
        .unwrap_or_default();
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    if insert_into_text_field(settings, &target, &text) {
        return;
    }

    if target
        .closest(&settings.editor_selector)
        .ok()
        .flatten()
        .is_some()
        && insert_into_rich_editor(settings, &text)
    {
        return;
    }

    insert_into_editable(settings, &target, &text);
}

/// Inputs and textareas share the value/selection API but are distinct
/// web-sys types.
#[derive(Clone)]
enum TextField {
    Input(HtmlInputElement),
    Area(HtmlTextAreaElement),
}

impl TextField {
    fn from_element(el: &Element) -> Option<Self> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(Self::Input(input.clone()));
        }
        el.dyn_ref::<HtmlTextAreaElement>()
            .map(|area| Self::Area(area.clone()))
    }

    fn value(&self) -> String {
        match self {
            Self::Input(i) => i.value(),
            Self::Area(a) => a.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(i) => i.set_value(value),
            Self::Area(a) => a.set_value(value),
        }
    }

    // Some input types report no selection; treat those as caret-at-end.
    fn selection(&self) -> (u32, u32) {
        let end_of_value = self.value().encode_utf16().count() as u32;
        let (start, end) = match self {
            Self::Input(i) => (i.selection_start(), i.selection_end()),
            Self::Area(a) => (a.selection_start(), a.selection_end()),
        };
        (
            start.ok().flatten().unwrap_or(end_of_value),
            end.ok().flatten().unwrap_or(end_of_value),
        )
    }

    fn set_caret(&self, pos: u32) {
        let _ = match self {
            Self::Input(i) => i.set_selection_range(pos, pos),
            Self::Area(a) => a.set_selection_range(pos, pos),
        };
    }

    fn focus(&self) {
        let _ = match self {
            Self::Input(i) => i.focus(),
            Self::Area(a) => a.focus(),
        };
    }

    fn is_connected(&self) -> bool {
        match self {
            Self::Input(i) => i.is_connected(),
            Self::Area(a) => a.is_connected(),
        }
    }
}

/// Splices `text` into an input or textarea at the current selection.
/// Returns false when the target is neither, leaving classification to
/// the caller.
pub fn insert_into_text_field(settings: &Rc<Settings>, target: &Element, text: &str) -> bool {
    let Some(field) = TextField::from_element(target) else {
        return false;
    };
    let (start, end) = field.selection();
    let spliced = splice_value(&field.value(), start, end, text);
    field.set_value(&spliced.value);
    field.set_caret(spliced.caret);

    // Trailing-space keystroke once the host's own input handling has
    // settled; the field may be gone by then.
    let delay = settings.settle_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        if !field.is_connected() {
            return;
        }
        field.focus();
        let end = field.value().encode_utf16().count() as u32;
        field.set_caret(end);
        if let Some(doc) = dom::document() {
            exec_insert_text(&doc, " ");
        }
        let end = field.value().encode_utf16().count() as u32;
        field.set_caret(end);
    });
    true
}

/// Inserts through the editor command surface. Returns false when the
/// editor instance cannot be resolved, letting the caller fall back to
/// the generic contenteditable path.
pub fn insert_into_rich_editor(settings: &Rc<Settings>, text: &str) -> bool {
    let Some(doc) = dom::document() else {
        return false;
    };
    let Some(root) = dom::query(&doc, &settings.editor_selector) else {
        return false;
    };
    let Some(handle) = EditorHandle::from_element(&root) else {
        log::debug!("editor instance unavailable, degrading to generic paste");
        return false;
    };

    let normalized = normalize_rich_text(text);
    if handle.caret_in_node(&settings.code_block_node) {
        // Inside a code block newlines must stay literal.
        handle.insert_content(&normalized.as_str().into());
    } else {
        handle.insert_content(&editor::paragraph_nodes(&normalized));
    }

    let settings = Rc::clone(settings);
    spawn_local(async move {
        TimeoutFuture::new(settings.settle_delay_ms).await;
        // Re-resolve: the editor may have been torn down meanwhile.
        let Some(doc) = dom::document() else {
            return;
        };
        let Some(root) = dom::query(&doc, &settings.editor_selector) else {
            return;
        };
        if let Some(handle) = EditorHandle::from_element(&root) {
            handle.insert_text(" ");
        }
    });
    true
}

/// Generic contenteditable fallback: a text node at the caret (or
/// appended when there is no active selection), caret collapsed after it.
pub fn insert_into_editable(settings: &Rc<Settings>, target: &Element, text: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };

    let selection = window.get_selection().ok().flatten();
    match selection.filter(|s| s.range_count() > 0) {
        Some(sel) => {
            if let Ok(range) = sel.get_range_at(0) {
                let _ = range.delete_contents();
                let node = doc.create_text_node(text);
                let _ = range.insert_node(&node);
                range.collapse_with_to_start(false);
                let _ = sel.remove_all_ranges();
                let _ = sel.add_range(&range);
            }
        }
        None => {
            let node = doc.create_text_node(text);
            let _ = target.append_child(&node);
        }
    }

    let target = target.clone();
    let delay = settings.settle_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        if !target.is_connected() {
            return;
        }
        if let Some(h) = target.dyn_ref::<HtmlElement>() {
            let _ = h.focus();
        }
        let Some(window) = dom::window() else {
            return;
        };
        let Some(doc) = window.document() else {
            return;
        };
        let (Ok(Some(sel)), Ok(range)) = (window.get_selection(), doc.create_range()) else {
            return;
        };
        if range.select_node_contents(&target).is_ok() {
            range.collapse_with_to_start(false);
            let _ = sel.remove_all_ranges();
            let _ = sel.add_range(&range);
            exec_insert_text(&doc, " ");
        }
    });
}

// execCommand lives on HtmlDocument, not Document.
fn exec_insert_text(doc: &Document, text: &str) {
    if let Some(html_doc) = doc.dyn_ref::<HtmlDocument>() {
        let _ = html_doc.exec_command_with_show_ui_and_value("insertText", false, text);
    }
}

/// Navigation watcher plus load-time safety nets. The editor instance is
/// destroyed and recreated by the host on route changes; the probe only
/// reports readiness, since the document handler stays installed either
/// way.
fn watch(normalizer: Rc<PasteNormalizer>) {
    let Some(doc) = dom::document() else {
        return;
    };

    let on_mutation = {
        let normalizer = Rc::clone(&normalizer);
        Closure::wrap(Box::new(move || {
            let Some(url) = dom::current_url() else {
                return;
            };
            let changed = {
                let mut last = normalizer.last_url.borrow_mut();
                if *last != url {
                    *last = url;
                    true
                } else {
                    false
                }
            };
            if changed {
                spawn_probe(&normalizer, normalizer.settings.reattach_delay_ms);
            }
        }) as Box<dyn FnMut()>)
    };
    if let Ok(observer) = MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        let _ = observer.observe_with_options(&doc, &init);
    }
    // Page-lifetime observer callback.
    on_mutation.forget();

    // Safety nets for frameworks that replace parts of the DOM.
    let dom_loaded = reattach_closure(&normalizer);
    let _ = doc
        .add_event_listener_with_callback("DOMContentLoaded", dom_loaded.as_ref().unchecked_ref());
    dom_loaded.forget();
    if let Some(window) = dom::window() {
        let loaded = reattach_closure(&normalizer);
        let _ = window.add_event_listener_with_callback("load", loaded.as_ref().unchecked_ref());
        loaded.forget();
    }
}

fn reattach_closure(normalizer: &Rc<PasteNormalizer>) -> Closure<dyn FnMut()> {
    let normalizer = Rc::clone(normalizer);
    Closure::wrap(Box::new(move || {
        attach(&normalizer);
        spawn_probe(&normalizer, 0);
    }) as Box<dyn FnMut()>)
}

/// Probes for the editor instance after `delay` ms, with one bounded
/// retry when the root element exists but the instance is not yet set.
fn spawn_probe(normalizer: &Rc<PasteNormalizer>, delay: u32) {
    let settings = Rc::clone(&normalizer.settings);
    spawn_local(async move {
        if delay > 0 {
            TimeoutFuture::new(delay).await;
        }
        if editor_ready(&settings) {
            log::info!("editor instance attached");
            return;
        }
        TimeoutFuture::new(settings.editor_retry_delay_ms).await;
        if editor_ready(&settings) {
            log::info!("editor instance attached after retry");
        } else {
            log::debug!("editor not ready, rich paste will degrade until it appears");
        }
    });
}

fn editor_ready(settings: &Settings) -> bool {
    dom::document()
        .and_then(|doc| dom::query(&doc, &settings.editor_selector))
        .and_then(|root| EditorHandle::from_element(&root))
        .is_some()
}
