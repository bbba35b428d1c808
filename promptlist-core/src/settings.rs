//! Launch configuration for the content script.
//!
//! Every host-page structural signature, route prefix, breakpoint, and
//! delay lives here so the script can track host markup drift without a
//! rebuild. The extension loader passes a JSON document to `launch`;
//! missing fields fall back to the current host contract.

use serde::Deserialize;
use thiserror::Error;

use crate::preview::PreviewLimit;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path prefixes on which the controls are shown.
    pub route_prefixes: Vec<String>,
    /// Toolbar container the controls are injected into.
    pub button_container_selector: String,
    /// User message bubbles, in document order.
    pub user_messages_selector: String,
    /// Wrapper around a user message, the start point for response lookup.
    pub user_wrapper_selector: String,
    /// Class marking an assistant response block.
    pub response_block_class: String,
    /// Per-section collapse affordance.
    pub collapse_button_selector: String,
    /// Per-section expand affordance.
    pub expand_button_selector: String,
    /// The scrollable conversation container.
    pub chat_container_selector: String,
    /// Root element of the host rich-text editor.
    pub editor_selector: String,
    /// Node type name the editor reports for preformatted blocks.
    pub code_block_node: String,
    pub preview_limit: PreviewLimit,
    pub mobile_breakpoint_px: f64,
    pub edge_margin_px: f64,
    pub tooltip_gap_px: f64,
    /// Scroll offset as a fraction of viewport height.
    pub scroll_offset_fraction: f64,
    pub poll_interval_ms: u32,
    /// Settle delay before deferred follow-up DOM writes.
    pub settle_delay_ms: u32,
    /// Retry delay when the editor element exists but is uninitialized.
    pub editor_retry_delay_ms: u32,
    /// Delay between a detected navigation and the editor re-probe.
    pub reattach_delay_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            route_prefixes: vec!["/chat/".into(), "/c/".into(), "/project/".into()],
            button_container_selector:
                ".absolute.flex.flex-row.items-center.gap-0\\.5.ms-auto.end-3".into(),
            user_messages_selector: ".flex.flex-col.items-end .message-bubble".into(),
            user_wrapper_selector: ".flex.flex-col.items-end".into(),
            response_block_class: "items-start".into(),
            collapse_button_selector: "button[aria-label=\"Collapse\"]".into(),
            expand_button_selector: "button[aria-label=\"Expand\"]".into(),
            chat_container_selector:
                ".w-full.h-full.overflow-y-auto.overflow-x-hidden.scrollbar-gutter-stable.flex.flex-col.items-center.px-gutter"
                    .into(),
            editor_selector: ".tiptap".into(),
            code_block_node: "codeBlock".into(),
            preview_limit: PreviewLimit::Words(5),
            mobile_breakpoint_px: 640.0,
            edge_margin_px: 16.0,
            tooltip_gap_px: 4.0,
            scroll_offset_fraction: 0.05,
            poll_interval_ms: 1000,
            settle_delay_ms: 10,
            editor_retry_delay_ms: 200,
            reattach_delay_ms: 300,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s.route_prefixes.len(), 3);
        assert_eq!(s.preview_limit, PreviewLimit::Words(5));
        assert_eq!(s.poll_interval_ms, 1000);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let s = Settings::from_json(
            r#"{"route_prefixes": ["/talk/"], "preview_limit": {"chars": 100}}"#,
        )
        .unwrap();
        assert_eq!(s.route_prefixes, vec!["/talk/".to_string()]);
        assert_eq!(s.preview_limit, PreviewLimit::Chars(100));
        assert_eq!(s.editor_selector, ".tiptap");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{"poll_interval_ms": "soon"}"#).is_err());
    }
}
