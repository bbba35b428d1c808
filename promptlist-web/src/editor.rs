//! Duck-typed bridge to the host page's rich-text editor instance.
//!
//! The host exposes the editor object as an `editor` property on the
//! editor root element. Nothing about its shape is guaranteed, so every
//! access goes through `Reflect` and degrades to `None`/`false` when the
//! shape does not match.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

pub struct EditorHandle {
    editor: Object,
}

impl EditorHandle {
    /// Resolves the live editor instance off the editor root element.
    /// `None` means the host has not (yet) initialized it.
    pub fn from_element(root: &Element) -> Option<Self> {
        let value = Reflect::get(root, &JsValue::from_str("editor")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self {
            editor: value.dyn_into().ok()?,
        })
    }

    fn command(&self, name: &str) -> Option<(Object, Function)> {
        let commands = Reflect::get(&self.editor, &JsValue::from_str("commands"))
            .ok()?
            .dyn_into::<Object>()
            .ok()?;
        let function = Reflect::get(&commands, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some((commands, function))
    }

    /// Structured-content insertion: accepts a plain string or an array of
    /// node JSON documents, per the editor's `insertContent` command.
    pub fn insert_content(&self, content: &JsValue) -> bool {
        self.command("insertContent")
            .and_then(|(this, f)| f.call1(&this, content).ok())
            .is_some()
    }

    /// Plain text insertion at the caret, as if typed.
    pub fn insert_text(&self, text: &str) -> bool {
        self.command("insertText")
            .and_then(|(this, f)| f.call1(&this, &JsValue::from_str(text)).ok())
            .is_some()
    }

    /// True when the caret's parent node in the editor document model has
    /// the given type name (e.g. a preformatted block).
    pub fn caret_in_node(&self, node_name: &str) -> bool {
        self.caret_parent_node_name().as_deref() == Some(node_name)
    }

    // state.doc.resolve(state.selection.from).parent.type.name
    fn caret_parent_node_name(&self) -> Option<String> {
        let state = Reflect::get(&self.editor, &JsValue::from_str("state")).ok()?;
        let selection = Reflect::get(&state, &JsValue::from_str("selection")).ok()?;
        let from = Reflect::get(&selection, &JsValue::from_str("from")).ok()?;
        let doc = Reflect::get(&state, &JsValue::from_str("doc")).ok()?;
        let resolve = Reflect::get(&doc, &JsValue::from_str("resolve"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let resolved = resolve.call1(&doc, &from).ok()?;
        let parent = Reflect::get(&resolved, &JsValue::from_str("parent")).ok()?;
        let node_type = Reflect::get(&parent, &JsValue::from_str("type")).ok()?;
        Reflect::get(&node_type, &JsValue::from_str("name"))
            .ok()?
            .as_string()
    }
}

/// One `{type: "paragraph", content: [{type: "text", text: line}]}` node
/// per line, for pasting multi-line text outside preformatted regions.
/// Blank lines become empty paragraphs since the editor rejects empty
/// text nodes.
pub fn paragraph_nodes(text: &str) -> JsValue {
    let nodes = js_sys::Array::new();
    for line in text.split('\n') {
        let node = Object::new();
        let _ = Reflect::set(
            &node,
            &JsValue::from_str("type"),
            &JsValue::from_str("paragraph"),
        );
        if !line.is_empty() {
            let text_node = Object::new();
            let _ = Reflect::set(
                &text_node,
                &JsValue::from_str("type"),
                &JsValue::from_str("text"),
            );
            let _ = Reflect::set(
                &text_node,
                &JsValue::from_str("text"),
                &JsValue::from_str(line),
            );
            let content = js_sys::Array::of1(&text_node);
            let _ = Reflect::set(&node, &JsValue::from_str("content"), &content);
        }
        nodes.push(&node);
    }
    nodes.into()
}
