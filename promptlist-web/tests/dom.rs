//! Browser-side behavior tests: dropdown lifecycle, injection re-check,
//! and the paste insertion paths.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use promptlist_core::{Settings, ToggleState};
use promptlist_web::app::App;
use promptlist_web::dropdown::Dropdown;
use promptlist_web::{dom, lifecycle, messages, paste, theme};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document().unwrap()
}

fn make_element(doc: &Document, tag: &str, class: &str) -> Element {
    let el = doc.create_element(tag).unwrap();
    el.set_class_name(class);
    el
}

fn append_to_body(doc: &Document, el: &Element) {
    doc.body().unwrap().append_child(el).unwrap();
}

fn make_app(doc: &Document, settings: Settings) -> Rc<App> {
    let settings = Rc::new(settings);
    let dropdown = Dropdown::new(doc, Rc::clone(&settings)).unwrap();
    Rc::new(App {
        settings,
        toggle_state: Cell::new(ToggleState::Collapse),
        last_url: RefCell::new(dom::current_url().unwrap_or_default()),
        dropdown,
        prompt_control: RefCell::new(None),
        toggle_control: RefCell::new(None),
    })
}

#[wasm_bindgen_test]
fn dropdown_toggle_is_idempotent_and_singleton() {
    let doc = document();
    let anchor = make_element(&doc, "button", "");
    append_to_body(&doc, &anchor);

    let dropdown = Dropdown::new(&doc, Rc::new(Settings::default())).unwrap();
    assert!(!dropdown.is_open());

    dropdown.toggle(&doc, &anchor);
    assert!(dropdown.is_open());
    dropdown.toggle(&doc, &anchor);
    assert!(!dropdown.is_open());

    // panel is reused, never rebuilt per toggle
    assert_eq!(
        doc.query_selector_all(&format!("#{}", theme::DROPDOWN_ID))
            .unwrap()
            .length(),
        1
    );

    dropdown.element().remove();
    anchor.remove();
}

#[wasm_bindgen_test]
fn dropdown_lists_messages_with_response_affordance() {
    let doc = document();
    let outer = make_element(&doc, "div", "");
    let wrapper = make_element(&doc, "div", "flex flex-col items-end");
    let bubble = make_element(&doc, "div", "message-bubble");
    bubble.set_text_content(Some("one two three four five six seven"));
    wrapper.append_child(&bubble).unwrap();
    let response = make_element(&doc, "div", "items-start");
    outer.append_child(&wrapper).unwrap();
    outer.append_child(&response).unwrap();
    append_to_body(&doc, &outer);

    let settings = Settings::default();
    let records = messages::collect(&doc, &settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].preview_text, "one two three four five...");
    assert_eq!(records[0].response.as_ref(), Some(&response));

    let anchor = make_element(&doc, "button", "");
    append_to_body(&doc, &anchor);
    let dropdown = Dropdown::new(&doc, Rc::new(settings)).unwrap();
    dropdown.toggle(&doc, &anchor);
    let items = dropdown.element().children().length();
    assert_eq!(items, 1);
    // the jump-to-answer affordance rides inside the item
    assert!(dropdown
        .element()
        .query_selector(&format!("[aria-label=\"{}\"]", theme::ANSWER_TOOLTIP))
        .unwrap()
        .is_some());

    dropdown.element().remove();
    anchor.remove();
    outer.remove();
}

#[wasm_bindgen_test]
fn recheck_is_idempotent_and_orders_controls() {
    let doc = document();
    let toolbar = doc.create_element("div").unwrap();
    toolbar.set_id("test-toolbar");
    append_to_body(&doc, &toolbar);

    let app = make_app(
        &doc,
        Settings {
            button_container_selector: "#test-toolbar".into(),
            route_prefixes: vec!["/".into()],
            ..Settings::default()
        },
    );

    lifecycle::recheck(&app);
    lifecycle::recheck(&app);
    lifecycle::recheck(&app);

    assert_eq!(
        doc.query_selector_all(&format!("#{}", theme::PROMPT_LIST_BUTTON_ID))
            .unwrap()
            .length(),
        1
    );
    assert_eq!(
        doc.query_selector_all(&format!("#{}", theme::SECTION_TOGGLE_BUTTON_ID))
            .unwrap()
            .length(),
        1
    );
    // prompt-list first, toggle immediately after
    let first = toolbar.first_element_child().unwrap();
    assert_eq!(first.id(), theme::PROMPT_LIST_BUTTON_ID);
    assert_eq!(
        first.next_element_sibling().unwrap().id(),
        theme::SECTION_TOGGLE_BUTTON_ID
    );

    app.dropdown.element().remove();
    toolbar.remove();
}

#[wasm_bindgen_test]
fn recheck_creates_nothing_off_route() {
    let doc = document();
    let toolbar = doc.create_element("div").unwrap();
    toolbar.set_id("off-route-toolbar");
    append_to_body(&doc, &toolbar);

    let app = make_app(
        &doc,
        Settings {
            button_container_selector: "#off-route-toolbar".into(),
            route_prefixes: vec!["/never-matches/".into()],
            ..Settings::default()
        },
    );

    lifecycle::recheck(&app);
    assert_eq!(toolbar.children().length(), 0);
    assert!(app.prompt_control.borrow().is_none());

    app.dropdown.element().remove();
    toolbar.remove();
}

#[wasm_bindgen_test]
fn url_change_resets_toggle_state() {
    let doc = document();
    let app = make_app(
        &doc,
        Settings {
            route_prefixes: vec!["/never-matches/".into()],
            ..Settings::default()
        },
    );

    app.toggle_state.set(ToggleState::Expand);
    *app.last_url.borrow_mut() = "https://example.invalid/stale".into();
    lifecycle::handle_url_change(&app);

    assert_eq!(app.toggle_state.get(), ToggleState::Collapse);
    assert_eq!(*app.last_url.borrow(), dom::current_url().unwrap());

    app.dropdown.element().remove();
}

#[wasm_bindgen_test]
fn history_navigation_entry_points_drive_url_change() {
    let doc = document();
    let app = make_app(
        &doc,
        Settings {
            route_prefixes: vec!["/never-matches/".into()],
            ..Settings::default()
        },
    );
    lifecycle::start(Rc::clone(&app));

    let window = dom::window().unwrap();
    let history = window.history().unwrap();
    let original_url = dom::current_url().unwrap();

    // programmatic push navigation
    app.toggle_state.set(ToggleState::Expand);
    history
        .push_state_with_url(&JsValue::NULL, "", Some("/nav-check-push"))
        .unwrap();
    assert_eq!(app.toggle_state.get(), ToggleState::Collapse);
    assert_eq!(*app.last_url.borrow(), dom::current_url().unwrap());
    assert!(app.last_url.borrow().contains("/nav-check-push"));

    // programmatic replace navigation
    app.toggle_state.set(ToggleState::Expand);
    history
        .replace_state_with_url(&JsValue::NULL, "", Some("/nav-check-replace"))
        .unwrap();
    assert_eq!(app.toggle_state.get(), ToggleState::Collapse);
    assert!(app.last_url.borrow().contains("/nav-check-replace"));

    // put the harness page URL back
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&original_url));
    app.dropdown.element().remove();
}

#[wasm_bindgen_test]
fn paste_into_input_splices_at_caret() {
    let doc = document();
    let input: HtmlInputElement = doc
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    append_to_body(&doc, &input);
    input.set_value("abcdef");
    input.set_selection_range(2, 2).unwrap();

    let settings = Rc::new(Settings::default());
    assert!(paste::insert_into_text_field(&settings, &input, "hello"));

    assert_eq!(input.value(), "abhellocdef");
    assert_eq!(input.selection_start().unwrap(), Some(7));
    assert_eq!(input.selection_end().unwrap(), Some(7));

    input.remove();
}

#[wasm_bindgen_test]
fn paste_into_input_replaces_selection() {
    let doc = document();
    let input: HtmlInputElement = doc
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    append_to_body(&doc, &input);
    input.set_value("abcdef");
    input.set_selection_range(1, 4).unwrap();

    let settings = Rc::new(Settings::default());
    assert!(paste::insert_into_text_field(&settings, &input, "X"));
    assert_eq!(input.value(), "aXef");
    assert_eq!(input.selection_start().unwrap(), Some(2));

    input.remove();
}

#[wasm_bindgen_test]
fn paste_into_contenteditable_inserts_text_node() {
    let doc = document();
    let region = make_element(&doc, "div", "");
    let _ = region.set_attribute("contenteditable", "true");
    append_to_body(&doc, &region);

    // collapsed selection inside the region
    let window = dom::window().unwrap();
    let selection = window.get_selection().unwrap().unwrap();
    let range = doc.create_range().unwrap();
    range.select_node_contents(&region).unwrap();
    range.collapse_with_to_start(true);
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();

    let settings = Rc::new(Settings::default());
    paste::insert_into_editable(&settings, &region, "x");

    assert_eq!(region.text_content().unwrap(), "x");
    assert_eq!(region.child_nodes().length(), 1);
    let node = region.child_nodes().get(0).unwrap();
    assert_eq!(node.node_type(), web_sys::Node::TEXT_NODE);

    // caret collapsed immediately after the inserted text
    let selection = window.get_selection().unwrap().unwrap();
    assert!(selection.get_range_at(0).unwrap().collapsed());
    assert_eq!(selection.anchor_offset(), 1);

    region.remove();
}

#[wasm_bindgen_test]
fn paste_falls_back_when_editor_instance_missing() {
    let doc = document();
    let root = make_element(&doc, "div", "tiptap");
    append_to_body(&doc, &root);

    let settings = Rc::new(Settings::default());
    // element exists but no `editor` property was set by the host
    assert!(!paste::insert_into_rich_editor(&settings, "text"));

    root.remove();
}

#[wasm_bindgen_test]
fn bulk_toggle_flips_with_zero_matching_affordances() {
    let doc = document();
    let app = make_app(&doc, Settings::default());

    assert_eq!(app.toggle_state.get(), ToggleState::Collapse);
    promptlist_web::buttons::run_bulk_toggle(&app);
    assert_eq!(app.toggle_state.get(), ToggleState::Expand);
    promptlist_web::buttons::run_bulk_toggle(&app);
    assert_eq!(app.toggle_state.get(), ToggleState::Collapse);

    app.dropdown.element().remove();
}
