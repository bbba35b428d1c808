//! Host-page-independent logic for the PromptList content script.
//!
//! Everything in this crate is pure and natively testable: text preview
//! derivation, floating-panel placement math, clipboard normalization,
//! the section-toggle state machine, route matching, and the settings
//! document the WASM crate is launched with. The DOM-facing half lives
//! in `promptlist-web`.

pub mod clipboard;
pub mod geometry;
pub mod preview;
pub mod routes;
pub mod settings;
pub mod toggle;

pub use clipboard::{normalize_rich_text, splice_value, SpliceResult};
pub use geometry::{container_scroll_target, dropdown_position, tooltip_translation, Point, Rect, Viewport};
pub use preview::{preview, PreviewLimit, EMPTY_MESSAGE_SENTINEL};
pub use routes::route_matches;
pub use settings::{Settings, SettingsError};
pub use toggle::ToggleState;
