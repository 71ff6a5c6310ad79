//! Global controller slot.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Every DOM listener and timer reaches the controller through [`with_app`].

use crate::dom::DomPage;
use crate::timers::TimerScheduler;
use lp_behavior::Landing;
use std::cell::RefCell;
use tracing::warn;

pub type App = Landing<DomPage, TimerScheduler>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

pub fn install(app: App) {
    APP.with(|slot| *slot.borrow_mut() = Some(app));
}

/// Run `f` against the installed controller. Returns `None` before
/// [`install`] or if the controller is already borrowed further up the
/// stack (a listener fired synchronously from another handler).
pub fn with_app<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut App) -> R,
{
    APP.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            warn!("landing controller busy; event dropped");
            None
        }
    })
}
