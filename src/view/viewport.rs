// Scroll seam for the egui page canvas
//
// Views report where each anchor is laid out; the router asks for scrolls and
// the next render pass carries them out.

use crate::router::Viewport;
use eframe::egui;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct EguiViewport {
    /// Anchors laid out during the previous frame.
    rendered: HashSet<String>,
    /// Anchors reported so far in the current frame.
    seen: HashSet<String>,
    to_origin: bool,
    anchor_request: Option<String>,
}

impl EguiViewport {
    /// Start collecting anchors for a new frame.
    pub fn begin_frame(&mut self) {
        self.rendered = std::mem::take(&mut self.seen);
    }

    /// Record an anchor at the cursor and scroll to it if one was requested.
    pub fn anchor(&mut self, ui: &egui::Ui, anchor: &str) {
        self.seen.insert(anchor.to_string());
        if self.anchor_request.as_deref() == Some(anchor) {
            ui.scroll_to_cursor(Some(egui::Align::Min));
            self.anchor_request = None;
        }
    }

    /// Consume a pending jump to the top of the page.
    pub fn take_origin_request(&mut self) -> bool {
        std::mem::take(&mut self.to_origin)
    }

    pub fn is_rendered(&self, anchor: &str) -> bool {
        self.rendered.contains(anchor)
    }

    pub fn requested_anchor(&self) -> Option<&str> {
        self.anchor_request.as_deref()
    }
}

impl Viewport for EguiViewport {
    fn scroll_to_origin(&mut self) {
        self.to_origin = true;
        self.anchor_request = None;
    }

    fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
        if !self.rendered.contains(anchor) {
            return false;
        }
        self.anchor_request = Some(anchor.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_requires_previous_frame() {
        let mut viewport = EguiViewport::default();
        assert!(!viewport.scroll_to_anchor("contact"));

        viewport.seen.insert("contact".to_string());
        assert!(!viewport.scroll_to_anchor("contact"));

        viewport.begin_frame();
        assert!(viewport.is_rendered("contact"));
        assert!(viewport.scroll_to_anchor("contact"));
        assert_eq!(viewport.requested_anchor(), Some("contact"));
    }

    #[test]
    fn test_anchors_expire_after_a_frame_without_them() {
        let mut viewport = EguiViewport::default();
        viewport.seen.insert("about".to_string());
        viewport.begin_frame();
        viewport.begin_frame();
        assert!(!viewport.is_rendered("about"));
    }

    #[test]
    fn test_origin_cancels_anchor_request() {
        let mut viewport = EguiViewport::default();
        viewport.seen.insert("services".to_string());
        viewport.begin_frame();
        assert!(viewport.scroll_to_anchor("services"));

        viewport.scroll_to_origin();
        assert_eq!(viewport.requested_anchor(), None);
        assert!(viewport.take_origin_request());
        assert!(!viewport.take_origin_request());
    }
}
