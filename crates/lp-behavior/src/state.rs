//! Transient UI state that does not live in marker classes.
//!
//! Everything else (nav open, accordion expanded, modal visible, active TOC
//! link) is read back from the page, so the page stays the single source of
//! truth for anything the stylesheet can see.

use crate::cta::DirectionTracker;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cta: DirectionTracker,
    pub hero_index: usize,
    /// Scroll target captured when the auto-open expand ran.
    pub auto_open_target: Option<f64>,
}
