//! Landing page behavior core.
//!
//! Navigation toggling, the read-more accordion, scroll-driven table of
//! contents, call-to-action visibility, the info modal and same-page anchor
//! scrolling, written against the [`Page`] and [`Scheduler`] seams so the
//! same code runs in the browser and in plain unit tests.

pub mod accordion;
pub mod anchors;
pub mod cta;
pub mod error;
pub mod footer;
pub mod handles;
pub mod hero;
pub mod landing;
pub mod memory;
pub mod modal;
pub mod nav;
pub mod page;
pub mod schedule;
pub mod state;
pub mod toc;

pub use error::SetupError;
pub use handles::Handles;
pub use landing::Landing;
pub use lp_config::PageConfig;
pub use page::Page;
pub use schedule::{Scheduler, TaskKey};
pub use state::UiState;

/// What the host should do with the DOM event that triggered a handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Dispatch {
    pub const NONE: Dispatch = Dispatch {
        prevent_default: false,
        stop_propagation: false,
    };

    pub const PREVENT: Dispatch = Dispatch {
        prevent_default: true,
        stop_propagation: false,
    };

    pub const STOP: Dispatch = Dispatch {
        prevent_default: false,
        stop_propagation: true,
    };
}
