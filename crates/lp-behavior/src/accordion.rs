//! Read-more accordion.
//!
//! Expanded state is the `active` marker on both the button and the content.
//! Expanding schedules a scroll that lines the container up under the fixed
//! header; the page can also load straight into the expanded state when its
//! fragment matches the configured hash.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::{Page, markers, selectors};
use crate::schedule::{Scheduler, TaskKey};
use crate::Dispatch;
use tracing::debug;

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_accordion(&mut self) -> Result<(), SetupError> {
        if self.els.accordion_button.is_some() && self.els.accordion_content.is_none() {
            return Err(SetupError::MissingPartner {
                present: selectors::ACCORDION_BUTTON,
                missing: selectors::ACCORDION_CONTENT,
            });
        }
        Ok(())
    }

    pub fn is_accordion_expanded(&self) -> bool {
        self.els
            .accordion_button
            .as_ref()
            .is_some_and(|btn| self.page.has_class(btn, markers::ACTIVE))
    }

    /// The click must not reach the document-level outside-click handler.
    pub fn on_accordion_click(&mut self) -> Dispatch {
        self.toggle_accordion();
        Dispatch::STOP
    }

    /// Enter and Space behave like a click.
    pub fn on_accordion_keydown(&mut self, key: &str) -> Dispatch {
        match key {
            "Enter" | " " => {
                self.toggle_accordion();
                Dispatch::PREVENT
            }
            _ => Dispatch::NONE,
        }
    }

    fn toggle_accordion(&mut self) {
        if self.els.accordion_button.is_none() || self.els.accordion_content.is_none() {
            return;
        }
        let expanding = !self.is_accordion_expanded();
        self.set_accordion(expanding);
        if expanding {
            self.scheduler
                .schedule(TaskKey::AccordionScroll, self.config.timings.accordion_scroll_ms);
        }
    }

    pub(crate) fn set_accordion(&mut self, expanded: bool) {
        let (Some(btn), Some(content)) = (&self.els.accordion_button, &self.els.accordion_content) else {
            return;
        };
        self.page.set_class(btn, markers::ACTIVE, expanded);
        self.page.set_class(content, markers::ACTIVE, expanded);
        if let Some(label) = &self.els.accordion_label {
            let text = if expanded {
                &self.config.accordion.expand_label
            } else {
                &self.config.accordion.collapse_label
            };
            self.page.set_text(label, text);
        }
        if !expanded {
            self.scheduler.cancel(TaskKey::AccordionScroll);
            self.scheduler.cancel(TaskKey::AutoOpenScroll);
            self.state.auto_open_target = None;
        }
        debug!(expanded, "accordion toggled");
    }

    /// Document offset that puts the accordion container just below the header.
    fn accordion_scroll_top(&self) -> Option<f64> {
        let container = self.els.accordion_container.as_ref()?;
        Some(
            self.page.bounding_top(container) + self.page.scroll_y()
                - self.header_height()
                - self.config.margins.header_gap,
        )
    }

    pub(crate) fn scroll_to_accordion(&mut self) {
        if let Some(top) = self.accordion_scroll_top() {
            self.page.scroll_to_smooth(top);
        }
    }

    pub(crate) fn setup_auto_open(&mut self) -> Result<(), SetupError> {
        if self.els.accordion_button.is_none() || self.els.accordion_content.is_none() {
            return Ok(());
        }
        if self.page.location_hash() == self.config.accordion.auto_open_hash {
            debug!(hash = %self.config.accordion.auto_open_hash, "scheduling accordion auto-open");
            self.scheduler
                .schedule(TaskKey::AutoOpen, self.config.timings.auto_open_ms);
        }
        Ok(())
    }

    /// Expand now, scroll once the expanded content has had a moment to lay out.
    pub(crate) fn run_auto_open(&mut self) {
        self.set_accordion(true);
        self.state.auto_open_target = self.accordion_scroll_top();
        if self.state.auto_open_target.is_some() {
            self.scheduler
                .schedule(TaskKey::AutoOpenScroll, self.config.timings.auto_open_scroll_ms);
        }
    }
}
