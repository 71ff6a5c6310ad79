//! Footer year and the external form buttons.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::Page;
use crate::schedule::Scheduler;
use crate::Dispatch;
use tracing::debug;

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_footer_year(&mut self) -> Result<(), SetupError> {
        if let Some(el) = &self.els.footer_year {
            self.page.set_text(el, &self.page.current_year().to_string());
        }
        Ok(())
    }

    pub fn on_form_button_click(&mut self) -> Dispatch {
        debug!(url = %self.config.forms.url, "opening form");
        self.page.open_in_new_context(&self.config.forms.url);
        Dispatch::NONE
    }
}
