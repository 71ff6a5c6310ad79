//! `gloo-timers` backed [`Scheduler`].
//!
//! Dropping a `Timeout` or `Interval` cancels it, so replacing a map entry
//! is enough to cancel the previous run of the same key. Entries stay in
//! the map after firing and are dropped on the next schedule or cancel,
//! never from inside their own callback.

use crate::state;
use gloo_timers::callback::{Interval, Timeout};
use lp_behavior::{Scheduler, TaskKey};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

struct Armed {
    _timeout: Timeout,
    fired: Rc<Cell<bool>>,
}

#[derive(Default)]
pub struct TimerScheduler {
    timeouts: HashMap<TaskKey, Armed>,
    intervals: HashMap<TaskKey, Interval>,
}

fn fire(key: TaskKey) {
    state::with_app(|app| app.on_timer(key));
}

impl Scheduler for TimerScheduler {
    fn schedule(&mut self, key: TaskKey, delay_ms: u32) {
        self.cancel(key);
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            flag.set(true);
            fire(key);
        });
        self.timeouts.insert(
            key,
            Armed {
                _timeout: timeout,
                fired,
            },
        );
        debug!(?key, delay_ms, "timer armed");
    }

    fn every(&mut self, key: TaskKey, period_ms: u32) {
        self.cancel(key);
        let interval = Interval::new(period_ms, move || fire(key));
        self.intervals.insert(key, interval);
        debug!(?key, period_ms, "interval armed");
    }

    fn cancel(&mut self, key: TaskKey) {
        self.timeouts.remove(&key);
        self.intervals.remove(&key);
    }

    fn is_pending(&self, key: TaskKey) -> bool {
        self.intervals.contains_key(&key)
            || self
                .timeouts
                .get(&key)
                .is_some_and(|armed| !armed.fired.get())
    }
}
