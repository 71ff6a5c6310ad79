//! Table of contents: scroll-driven highlighting and desktop smooth scroll,
//! plus the collapsible list used on small screens.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::{Page, markers};
use crate::schedule::Scheduler;
use crate::Dispatch;
use tracing::debug;

/// Id of the last section, in document order, whose top minus `margin` has
/// been scrolled to.
pub fn current_section<'a, I>(sections: I, scroll_y: f64, margin: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - margin)
        .last()
        .map(|(id, _)| id)
}

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_toc_highlight(&mut self) -> Result<(), SetupError> {
        self.highlight_toc();
        Ok(())
    }

    /// Desktop only. Narrower viewports leave the markers untouched.
    pub fn highlight_toc(&mut self) {
        if !self.is_desktop() {
            return;
        }

        let sections: Vec<(String, f64)> = self
            .els
            .sections
            .iter()
            .filter_map(|section| {
                let id = self.page.attribute(section, "id")?;
                Some((id, self.page.offset_top(section)))
            })
            .collect();
        let current = current_section(
            sections.iter().map(|(id, top)| (id.as_str(), *top)),
            self.page.scroll_y(),
            self.config.margins.toc_trigger,
        )
        .map(|id| format!("#{id}"));

        for link in &self.els.toc_links {
            let active = current.is_some() && self.page.attribute(link, "href") == current;
            self.page.set_class(link, markers::ACTIVE, active);
        }
    }

    pub fn on_toc_link_click(&mut self, link: &P::Element) -> Dispatch {
        if !self.is_desktop() {
            return Dispatch::NONE;
        }

        let target = self
            .page
            .attribute(link, "href")
            .and_then(|href| self.page.query(&href));
        if let Some(target) = target {
            let top = self.page.offset_top(&target)
                - self.header_height()
                - self.config.margins.header_gap;
            self.page.scroll_to_smooth(top);

            for other in &self.els.toc_links {
                self.page.remove_class(other, markers::ACTIVE);
            }
            self.page.add_class(link, markers::ACTIVE);
        }
        Dispatch::PREVENT
    }

    pub fn is_mobile_toc_open(&self) -> bool {
        self.els
            .toc_list
            .as_ref()
            .is_some_and(|list| self.page.has_class(list, markers::ACTIVE))
    }

    pub fn on_toc_toggle_click(&mut self) -> Dispatch {
        let (Some(toggle), Some(list)) = (&self.els.toc_toggle, &self.els.toc_list) else {
            return Dispatch::NONE;
        };
        let expanded = self.page.attribute(toggle, "aria-expanded").as_deref() == Some("true");
        self.page.toggle_class(list, markers::ACTIVE);
        self.set_toc_expanded_attr(!expanded);
        debug!(expanded = !expanded, "mobile toc toggled");
        Dispatch::NONE
    }

    /// A link picked from the collapsible list closes it on small screens.
    pub fn on_toc_list_link_click(&mut self) -> Dispatch {
        if self.is_mobile_toc_viewport() && self.is_mobile_toc_open() {
            self.close_mobile_toc();
        }
        Dispatch::NONE
    }

    pub(crate) fn is_mobile_toc_viewport(&self) -> bool {
        self.page.viewport_width() <= self.config.breakpoints.mobile_toc_max
    }

    pub(crate) fn close_mobile_toc(&mut self) {
        if let Some(list) = &self.els.toc_list {
            self.page.remove_class(list, markers::ACTIVE);
        }
        self.set_toc_expanded_attr(false);
    }

    fn set_toc_expanded_attr(&self, expanded: bool) {
        if let Some(toggle) = &self.els.toc_toggle {
            let value = if expanded { "true" } else { "false" };
            self.page.set_attribute(toggle, "aria-expanded", value);
        }
    }
}
