//! Info modal.
//!
//! Opening fills the title and body, marks `#infoModal` active and locks
//! page scrolling. The close button, a backdrop click and Escape all go
//! through [`Landing::close_modal`].

use crate::landing::Landing;
use crate::page::{Page, markers, selectors};
use crate::schedule::Scheduler;
use crate::Dispatch;
use tracing::debug;

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub fn open_modal(&mut self, title: &str, html: &str) {
        if let Some(el) = &self.els.modal_title {
            self.page.set_text(el, title);
        }
        if let Some(el) = &self.els.modal_body {
            self.page.set_inner_html(el, html);
        }
        if let Some(modal) = &self.els.modal {
            self.page.add_class(modal, markers::ACTIVE);
        }
        self.set_body_overflow("hidden");
        debug!(title, "modal opened");
    }

    pub fn close_modal(&mut self) {
        if let Some(modal) = &self.els.modal {
            self.page.remove_class(modal, markers::ACTIVE);
        }
        self.set_body_overflow("auto");
        debug!("modal closed");
    }

    pub fn is_modal_open(&self) -> bool {
        self.els
            .modal
            .as_ref()
            .is_some_and(|modal| self.page.has_class(modal, markers::ACTIVE))
    }

    pub fn on_modal_close_click(&mut self) -> Dispatch {
        self.close_modal();
        Dispatch::NONE
    }

    /// Clicks on the modal root or its overlay close it; clicks inside the
    /// content box do not.
    pub fn on_modal_click(&mut self, target: &P::Element) -> Dispatch {
        let on_backdrop = self.els.modal.as_ref() == Some(target)
            || self.page.has_class(target, selectors::MODAL_OVERLAY_CLASS);
        if on_backdrop {
            self.close_modal();
        }
        Dispatch::NONE
    }

    pub fn on_document_keydown(&mut self, key: &str) -> Dispatch {
        if key == "Escape" && self.is_modal_open() {
            self.close_modal();
        }
        Dispatch::NONE
    }

    fn set_body_overflow(&self, value: &str) {
        if let Some(body) = &self.els.body {
            self.page.set_style(body, "overflow", value);
        }
    }
}
