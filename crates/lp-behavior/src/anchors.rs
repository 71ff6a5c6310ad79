//! Smooth scrolling for same-page anchors.

use crate::landing::Landing;
use crate::page::{selectors, Page};
use crate::schedule::Scheduler;
use crate::Dispatch;

impl<P: Page, S: Scheduler> Landing<P, S> {
    /// Intercepts `href="#id"` links whose target exists. The bare `#` and
    /// dangling fragments keep the browser's default behavior. TOC links on
    /// desktop belong to the TOC handler.
    pub fn on_anchor_click(&mut self, anchor: &P::Element) -> Dispatch {
        if self.is_desktop() && self.page.has_class(anchor, selectors::TOC_LINK_CLASS) {
            return Dispatch::NONE;
        }
        let Some(href) = self.page.attribute(anchor, "href") else {
            return Dispatch::NONE;
        };
        if href == "#" || !href.starts_with('#') {
            return Dispatch::NONE;
        }
        let Some(target) = self.page.query(&href) else {
            return Dispatch::NONE;
        };

        let top = self.page.bounding_top(&target) + self.page.scroll_y() - self.header_height();
        self.page.scroll_to_smooth(top);

        if self.is_narrow() && self.is_nav_open() {
            self.close_nav();
        }
        if self.is_mobile_toc_viewport() && self.is_mobile_toc_open() {
            self.close_mobile_toc();
        }
        Dispatch::PREVENT
    }
}
