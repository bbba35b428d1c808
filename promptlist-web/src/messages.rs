//! Message records for the dropdown: raw text, preview, and the
//! best-effort pairing with the assistant response that follows.

use promptlist_core::{preview, Settings};
use web_sys::{Document, Element};

use crate::dom;

/// One user message, derived from the live DOM each time the dropdown
/// opens and discarded on close.
pub struct MessageRecord {
    pub raw_text: String,
    pub preview_text: String,
    pub element: Element,
    pub response: Option<Element>,
}

/// All user messages currently in the document, in document order.
pub fn collect(doc: &Document, settings: &Settings) -> Vec<MessageRecord> {
    dom::query_all(doc, &settings.user_messages_selector)
        .into_iter()
        .map(|element| {
            let raw_text = element.text_content().unwrap_or_default();
            let preview_text = preview(&raw_text, settings.preview_limit);
            let response = find_corresponding_response(&element, settings);
            MessageRecord {
                raw_text,
                preview_text,
                element,
                response,
            }
        })
        .collect()
}

/// Nearest-following response block for a user message: first a sibling
/// inside the same outer wrapper, then the first response found in any
/// subsequent outer wrapper. A heuristic inherited from the host page's
/// grouping structure, not a guaranteed pairing.
fn find_corresponding_response(message: &Element, settings: &Settings) -> Option<Element> {
    let wrapper = message
        .closest(&settings.user_wrapper_selector)
        .ok()
        .flatten()?;
    let outer = wrapper.parent_element()?;

    let mut sibling = wrapper.next_element_sibling();
    while let Some(el) = sibling {
        if el.class_list().contains(&settings.response_block_class) {
            return Some(el);
        }
        sibling = el.next_element_sibling();
    }

    let response_selector = format!(":scope > .{}", settings.response_block_class);
    let mut next_outer = outer.next_element_sibling();
    while let Some(el) = next_outer {
        if let Ok(Some(response)) = el.query_selector(&response_selector) {
            return Some(response);
        }
        next_outer = el.next_element_sibling();
    }
    None
}
