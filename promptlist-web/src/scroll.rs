//! Scrolls a message or response into view with a fixed visual offset.

use promptlist_core::{container_scroll_target, Settings};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::dom;

/// Navigation offset: a fraction of the viewport height, so the target
/// lands just below the top edge on any screen size.
pub fn scroll_offset(settings: &Settings) -> f64 {
    (dom::viewport().height * settings.scroll_offset_fraction).round()
}

/// Smooth-scrolls `target` to `offset` pixels below the top of the
/// conversation container. When the container signature no longer matches
/// the host markup, falls back to a generic bring-into-view on whatever
/// ancestor scrolls. Never fails.
pub fn scroll_with_offset(doc: &Document, settings: &Settings, target: &Element, offset: f64) {
    if let Some(container) = dom::query(doc, &settings.chat_container_selector) {
        let rect = dom::client_rect(target);
        let container_rect = dom::client_rect(&container);
        let top = container_scroll_target(
            rect.top,
            container_rect.top,
            container.scroll_top() as f64,
            offset,
        );
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&opts);
    } else {
        log::debug!("conversation container not found, falling back to scroll_into_view");
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
