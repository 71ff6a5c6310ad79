//! Keyed, cancellable deferred tasks.
//!
//! A task is only a [`TaskKey`]; when it comes due the host hands the key back
//! to [`crate::Landing::on_timer`]. Arming a key that is already pending
//! replaces the pending task, so a repeated trigger never stacks callbacks.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKey {
    /// Scroll to the accordion after a manual expand.
    AccordionScroll,
    /// Expand the accordion because the page loaded on its fragment.
    AutoOpen,
    /// Scroll to the accordion once the auto-open expand has rendered.
    AutoOpenScroll,
    /// Advance the hero background image.
    HeroRotate,
}

pub trait Scheduler {
    /// Run `key` once after `delay_ms`, cancelling any pending run of `key`.
    fn schedule(&mut self, key: TaskKey, delay_ms: u32);
    /// Run `key` every `period_ms` until cancelled.
    fn every(&mut self, key: TaskKey, period_ms: u32);
    fn cancel(&mut self, key: TaskKey);
    fn is_pending(&self, key: TaskKey) -> bool;
}
