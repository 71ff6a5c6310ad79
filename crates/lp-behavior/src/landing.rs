//! The page controller.
//!
//! `Landing` owns the page, the scheduler, configuration and [`UiState`].
//! Each component adds its handlers in its own module; this file holds
//! startup, timer dispatch and the handlers that span several components.

use crate::error::SetupError;
use crate::handles::Handles;
use crate::page::{Page, markers, selectors};
use crate::schedule::{Scheduler, TaskKey};
use crate::state::UiState;
use crate::Dispatch;
use lp_config::PageConfig;
use tracing::{debug, warn};

type SetupStep<P, S> = (&'static str, fn(&mut Landing<P, S>) -> Result<(), SetupError>);

pub struct Landing<P: Page, S: Scheduler> {
    pub(crate) page: P,
    pub(crate) scheduler: S,
    pub(crate) config: PageConfig,
    pub(crate) state: UiState,
    pub(crate) els: Handles<P::Element>,
}

impl<P: Page, S: Scheduler> Landing<P, S> {
    /// Resolve element handles. Nothing is mutated until [`Landing::init`].
    pub fn new(page: P, scheduler: S, config: PageConfig) -> Self {
        let els = Handles::resolve(&page, &config);
        Self {
            page,
            scheduler,
            config,
            state: UiState::default(),
            els,
        }
    }

    /// Run every setup step. A failing step is logged and skipped; the
    /// names of failed steps are returned.
    pub fn init(&mut self) -> Vec<&'static str> {
        let steps: [SetupStep<P, S>; 7] = [
            ("footer-year", Self::setup_footer_year),
            ("navigation", Self::setup_navigation),
            ("accordion", Self::setup_accordion),
            ("hero-rotation", Self::setup_hero_rotation),
            ("toc-highlight", Self::setup_toc_highlight),
            ("cta", Self::setup_cta),
            ("accordion-auto-open", Self::setup_auto_open),
        ];

        let mut failed = Vec::new();
        for (name, step) in steps {
            if let Err(err) = step(self) {
                warn!(step = name, error = %err, "landing setup step failed");
                failed.push(name);
            }
        }
        failed
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn handles(&self) -> &Handles<P::Element> {
        &self.els
    }

    /// Called by the host when a scheduled task comes due.
    pub fn on_timer(&mut self, key: TaskKey) {
        debug!(?key, "timer fired");
        match key {
            TaskKey::AccordionScroll => self.scroll_to_accordion(),
            TaskKey::AutoOpen => self.run_auto_open(),
            TaskKey::AutoOpenScroll => {
                if let Some(top) = self.state.auto_open_target.take() {
                    self.page.scroll_to_smooth(top);
                }
            }
            TaskKey::HeroRotate => self.rotate_hero(),
        }
    }

    pub fn on_scroll(&mut self) {
        self.highlight_toc();
        self.update_cta();
    }

    pub fn on_resize(&mut self) {
        self.layout_cta();
    }

    /// Document-level click: closes whatever the click landed outside of.
    pub fn on_document_click(&mut self, target: &P::Element) -> Dispatch {
        let collapse_accordion = match (&self.els.accordion_button, &self.els.accordion_content) {
            (Some(_), Some(content)) => {
                self.page.closest(target, selectors::ACCORDION_CONTAINER).is_none()
                    && self.page.closest(target, selectors::ACCORDION_BUTTON).is_none()
                    && self.page.has_class(content, markers::ACTIVE)
            }
            _ => false,
        };
        if collapse_accordion {
            self.set_accordion(false);
        }

        if self.is_narrow()
            && self.page.closest(target, selectors::MAIN_NAV).is_none()
            && self.page.closest(target, selectors::NAV_TOGGLE).is_none()
            && self.is_nav_open()
        {
            self.close_nav();
        }

        if self.els.mobile_toc_nav.is_some()
            && self.els.toc_toggle.is_some()
            && self.page.closest(target, selectors::MOBILE_TOC_NAV).is_none()
            && self.is_mobile_toc_open()
        {
            self.close_mobile_toc();
        }

        Dispatch::NONE
    }

    pub(crate) fn header_height(&self) -> f64 {
        self.els
            .header
            .as_ref()
            .map(|header| self.page.offset_height(header))
            .unwrap_or(0.0)
    }

    /// Narrow layout: the navigation sits behind its toggle.
    pub(crate) fn is_narrow(&self) -> bool {
        self.page.viewport_width() <= self.config.breakpoints.nav_collapse_max
    }

    pub(crate) fn is_desktop(&self) -> bool {
        self.page.viewport_width() >= self.config.breakpoints.desktop_min
    }
}
