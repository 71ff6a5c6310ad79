//! Mobile navigation toggle.
//!
//! The open state is the `active` marker, kept identical on `.nav-toggle`
//! and `.main-nav`.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::{Page, markers, selectors};
use crate::schedule::Scheduler;
use crate::Dispatch;
use tracing::debug;

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_navigation(&mut self) -> Result<(), SetupError> {
        if self.els.nav_toggle.is_some() && self.els.main_nav.is_none() {
            return Err(SetupError::MissingPartner {
                present: selectors::NAV_TOGGLE,
                missing: selectors::MAIN_NAV,
            });
        }
        Ok(())
    }

    pub fn is_nav_open(&self) -> bool {
        self.els
            .main_nav
            .as_ref()
            .is_some_and(|nav| self.page.has_class(nav, markers::ACTIVE))
    }

    pub fn on_nav_toggle_click(&mut self) -> Dispatch {
        let (Some(toggle), Some(nav)) = (&self.els.nav_toggle, &self.els.main_nav) else {
            return Dispatch::NONE;
        };
        let open = self.page.toggle_class(nav, markers::ACTIVE);
        self.page.set_class(toggle, markers::ACTIVE, open);
        debug!(open, "navigation toggled");
        Dispatch::NONE
    }

    /// Any link inside the navigation closes it on narrow viewports.
    pub fn on_nav_link_click(&mut self) -> Dispatch {
        if self.is_narrow() {
            self.close_nav();
        }
        Dispatch::NONE
    }

    pub(crate) fn close_nav(&mut self) {
        if let Some(nav) = &self.els.main_nav {
            self.page.remove_class(nav, markers::ACTIVE);
        }
        if let Some(toggle) = &self.els.nav_toggle {
            self.page.remove_class(toggle, markers::ACTIVE);
        }
        debug!("navigation closed");
    }
}
