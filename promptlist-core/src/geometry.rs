//! Placement math for floating panels (dropdown, tooltip).
//!
//! All inputs are plain geometry so the viewport-edge rules are testable
//! without a DOM. The web crate feeds these from `getBoundingClientRect`
//! and window scroll offsets.

/// Viewport-relative bounding box, as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Page-absolute position, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Final page-absolute position for the dropdown panel, given its measured
/// width.
///
/// The panel sits just below the anchor, left-aligned. If the left-aligned
/// panel would cross the right viewport edge (within `edge_margin`), its
/// right edge re-anchors to the anchor's right edge instead. On narrow or
/// touch viewports (`mobile`) the panel centers horizontally in the
/// viewport regardless of the anchor.
pub fn dropdown_position(
    anchor: &Rect,
    panel_width: f64,
    viewport: &Viewport,
    page_scroll: Point,
    mobile: bool,
    edge_margin: f64,
) -> Point {
    let y = anchor.bottom() + page_scroll.y;
    let x = if mobile {
        (viewport.width - panel_width) / 2.0
    } else {
        let space_right = viewport.width - anchor.left;
        if panel_width > space_right - edge_margin {
            anchor.right() + page_scroll.x - panel_width
        } else {
            anchor.left + page_scroll.x
        }
    };
    Point { x, y }
}

/// Translation that centers a tooltip horizontally under its anchor with a
/// fixed vertical gap. Applied as a CSS `translate(x, y)` on the
/// fixed-position popper wrapper, so no page-scroll term is involved.
pub fn tooltip_translation(anchor: &Rect, tooltip_width: f64, gap: f64) -> Point {
    Point {
        x: anchor.left + anchor.width / 2.0 - tooltip_width / 2.0,
        y: anchor.bottom() + gap,
    }
}

/// Scroll offset that brings `target` to `offset` pixels below the top of
/// its scroll container.
pub fn container_scroll_target(
    target_top: f64,
    container_top: f64,
    container_scroll_top: f64,
    offset: f64,
) -> f64 {
    target_top - container_top + container_scroll_top - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };
    const NO_SCROLL: Point = Point { x: 0.0, y: 0.0 };

    #[test]
    fn test_dropdown_left_aligned_when_space_allows() {
        let anchor = Rect::new(100.0, 50.0, 40.0, 40.0);
        let pos = dropdown_position(&anchor, 300.0, &VIEWPORT, NO_SCROLL, false, 16.0);
        assert_eq!(pos.x, 100.0);
        assert_eq!(pos.y, 90.0);
    }

    #[test]
    fn test_dropdown_right_edge_avoidance() {
        let anchor = Rect::new(1100.0, 50.0, 40.0, 40.0);
        let pos = dropdown_position(&anchor, 300.0, &VIEWPORT, NO_SCROLL, false, 16.0);
        // right edge of panel pinned to right edge of anchor
        assert_eq!(pos.x, anchor.right() - 300.0);
    }

    #[test]
    fn test_dropdown_edge_margin_counts_against_available_space() {
        // 300px of space, 16px margin: a 290px panel must flip
        let anchor = Rect::new(980.0, 50.0, 40.0, 40.0);
        let pos = dropdown_position(&anchor, 290.0, &VIEWPORT, NO_SCROLL, false, 16.0);
        assert_eq!(pos.x, anchor.right() - 290.0);
        // a 280px panel still fits
        let pos = dropdown_position(&anchor, 280.0, &VIEWPORT, NO_SCROLL, false, 16.0);
        assert_eq!(pos.x, 980.0);
    }

    #[test]
    fn test_dropdown_centers_on_mobile() {
        let anchor = Rect::new(500.0, 50.0, 40.0, 40.0);
        let viewport = Viewport {
            width: 600.0,
            height: 800.0,
        };
        let pos = dropdown_position(&anchor, 400.0, &viewport, NO_SCROLL, true, 16.0);
        assert_eq!(pos.x, 100.0);
    }

    #[test]
    fn test_dropdown_adds_page_scroll() {
        let anchor = Rect::new(100.0, 50.0, 40.0, 40.0);
        let scroll = Point { x: 5.0, y: 250.0 };
        let pos = dropdown_position(&anchor, 300.0, &VIEWPORT, scroll, false, 16.0);
        assert_eq!(pos.x, 105.0);
        assert_eq!(pos.y, 340.0);
    }

    #[test]
    fn test_tooltip_centers_under_anchor() {
        let anchor = Rect::new(100.0, 50.0, 40.0, 40.0);
        let t = tooltip_translation(&anchor, 120.0, 4.0);
        assert_eq!(t.x, 100.0 + 20.0 - 60.0);
        assert_eq!(t.y, 94.0);
    }

    #[test]
    fn test_container_scroll_target_subtracts_offset() {
        assert_eq!(container_scroll_target(400.0, 100.0, 1000.0, 40.0), 1260.0);
    }
}
