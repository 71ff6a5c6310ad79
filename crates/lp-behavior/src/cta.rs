//! Floating call-to-action button.
//!
//! Two visibility policies, selected by [`CtaPolicy`]:
//! - threshold: the `visible` marker follows `scroll_y > threshold`;
//! - direction: on narrow viewports the button slides out while scrolling
//!   down and back in while scrolling up, and is resized per breakpoint.

use crate::error::SetupError;
use crate::landing::Landing;
use crate::page::{Page, markers};
use crate::schedule::Scheduler;
use lp_config::{Breakpoints, CtaPolicy};
use tracing::debug;

pub fn threshold_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaMove {
    Show,
    Hide,
}

/// Scroll-direction tracker for the direction policy.
#[derive(Debug, Clone)]
pub struct DirectionTracker {
    last_y: f64,
    shown: bool,
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self {
            last_y: 0.0,
            shown: true,
        }
    }
}

impl DirectionTracker {
    pub fn reset(&mut self, scroll_y: f64) {
        self.last_y = scroll_y;
        self.shown = true;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Changes within `min_delta` are ignored and do not move the reference
    /// offset. Returns a move only when the shown state flips.
    pub fn observe(&mut self, scroll_y: f64, min_delta: f64) -> Option<CtaMove> {
        let delta = scroll_y - self.last_y;
        if delta.abs() <= min_delta {
            return None;
        }
        self.last_y = scroll_y;
        match (delta > 0.0, self.shown) {
            (true, true) => {
                self.shown = false;
                Some(CtaMove::Hide)
            }
            (false, false) => {
                self.shown = true;
                Some(CtaMove::Show)
            }
            _ => None,
        }
    }
}

impl CtaMove {
    fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CtaMove::Show => &[
                ("opacity", "1"),
                ("transform", "translateY(0)"),
                ("pointer-events", "auto"),
            ],
            CtaMove::Hide => &[
                ("opacity", "0"),
                ("transform", "translateY(150%)"),
                ("pointer-events", "none"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaLayout {
    /// Full-width bar on phones.
    Compact,
    /// Floating pill on tablets.
    Regular,
    /// Stylesheet defaults.
    Desktop,
}

const LAYOUT_PROPERTIES: [&str; 5] = ["width", "left", "right", "bottom", "padding"];
const MOTION_PROPERTIES: [&str; 3] = ["opacity", "transform", "pointer-events"];

impl CtaLayout {
    pub fn for_width(width: f64, bp: &Breakpoints) -> Self {
        if width <= bp.cta_compact_max {
            CtaLayout::Compact
        } else if width <= bp.nav_collapse_max {
            CtaLayout::Regular
        } else {
            CtaLayout::Desktop
        }
    }

    fn styles(self) -> Option<[&'static str; 5]> {
        // Same order as LAYOUT_PROPERTIES.
        match self {
            CtaLayout::Compact => Some(["calc(100% - 32px)", "16px", "16px", "16px", "14px 20px"]),
            CtaLayout::Regular => Some(["auto", "auto", "24px", "24px", "16px 28px"]),
            CtaLayout::Desktop => None,
        }
    }
}

impl<P: Page, S: Scheduler> Landing<P, S> {
    pub(crate) fn setup_cta(&mut self) -> Result<(), SetupError> {
        if self.els.cta.is_none() {
            return Ok(());
        }
        let scroll_y = self.page.scroll_y();
        self.state.cta.reset(scroll_y);
        self.update_cta();
        self.layout_cta();
        Ok(())
    }

    pub fn is_cta_visible(&self) -> bool {
        let Some(cta) = &self.els.cta else {
            return false;
        };
        match self.config.cta.policy {
            CtaPolicy::Threshold { .. } => self.page.has_class(cta, markers::VISIBLE),
            CtaPolicy::Direction { .. } => self.state.cta.is_shown(),
        }
    }

    pub fn update_cta(&mut self) {
        let Some(cta) = &self.els.cta else {
            return;
        };
        match self.config.cta.policy {
            CtaPolicy::Threshold { threshold } => {
                let visible = threshold_visible(self.page.scroll_y(), threshold);
                self.page.set_class(cta, markers::VISIBLE, visible);
            }
            CtaPolicy::Direction { min_delta } => {
                if !self.is_narrow() {
                    return;
                }
                if let Some(motion) = self.state.cta.observe(self.page.scroll_y(), min_delta) {
                    for (property, value) in motion.styles() {
                        self.page.set_style(cta, property, value);
                    }
                    debug!(?motion, "cta moved");
                }
            }
        }
    }

    /// Direction policy only; runs at startup and on every resize.
    pub fn layout_cta(&mut self) {
        if !matches!(self.config.cta.policy, CtaPolicy::Direction { .. }) {
            return;
        }
        let Some(cta) = &self.els.cta else {
            return;
        };
        let layout = CtaLayout::for_width(self.page.viewport_width(), &self.config.breakpoints);
        match layout.styles() {
            Some(values) => {
                for (property, value) in LAYOUT_PROPERTIES.iter().zip(values) {
                    self.page.set_style(cta, property, value);
                }
            }
            None => {
                for property in LAYOUT_PROPERTIES.iter().chain(MOTION_PROPERTIES.iter()) {
                    self.page.clear_style(cta, property);
                }
                let scroll_y = self.page.scroll_y();
                self.state.cta.reset(scroll_y);
            }
        }
    }
}
