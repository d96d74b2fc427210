use std::time::Duration;

use tokio::time::Instant;

/// Quiet-window gate that coalesces rapid triggers into one pending payload.
///
/// The gate schedules nothing itself: the owning loop reads
/// [`DebounceGate::deadline`] into a `tokio::select!` timer arm and calls
/// [`DebounceGate::take_pending`] once the deadline elapses. Re-arming
/// replaces the stashed payload and restarts the window, so only the latest
/// payload can ever fire.
#[derive(Debug)]
pub struct DebounceGate<T> {
    quiet: Duration,
    deadline: Option<Instant>,
    pending: Option<T>,
}

impl<T> DebounceGate<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
            pending: None,
        }
    }

    /// Stashes `payload` and restarts the quiet window.
    pub fn arm(&mut self, payload: T) {
        self.pending = Some(payload);
        self.deadline = Some(Instant::now() + self.quiet);
    }

    /// Stashes `payload` with an already-elapsed deadline, bypassing the
    /// quiet window.
    pub fn force(&mut self, payload: T) {
        self.pending = Some(payload);
        self.deadline = Some(Instant::now());
    }

    /// Cancels the window, returning the payload that will now never fire.
    pub fn disarm(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    /// Deadline for the owning loop's timer arm; `None` while idle.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        if self.pending.is_some() {
            self.deadline
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending payload after its deadline elapsed.
    pub fn take_pending(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }
}
