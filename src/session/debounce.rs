//! Debounce Timer
//!
//! Collapses rapid keystrokes into a single delayed commit. At most one fire
//! is pending at any time: scheduling always cancels the previous timer before
//! arming a new one, never adds a second.
//!
//! Cancellation aborts the sleeper task, but an abort can race a fire that was
//! already queued on the event channel. Every fire therefore carries the
//! generation it was armed with, and the controller drops fires whose
//! generation is no longer current.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::controller::SessionEvent;

/// Cancellable delayed emitter of the committed query.
pub struct Debouncer {
    delay: Duration,
    events: UnboundedSender<SessionEvent>,
    /// Bumped on every schedule and cancel; a fire is only valid if its
    /// generation still matches.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, events: UnboundedSender<SessionEvent>) -> Self {
        Self {
            delay,
            events,
            generation: 0,
            pending: None,
        }
    }

    /// Cancels any pending fire and arms a new one for `query`.
    ///
    /// After the configured delay the committed query is emitted exactly once
    /// as [`SessionEvent::DebounceFired`].
    pub fn schedule(&mut self, query: String) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let events = self.events.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver dropped means the session is unmounting; nothing to do.
            let _ = events.send(SessionEvent::DebounceFired { query, generation });
        }));
    }

    /// Clears any pending fire with no emission.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a fire is armed and has not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Whether a fire with this generation is still the current one.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
