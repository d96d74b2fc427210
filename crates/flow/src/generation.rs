/// Identifier of one issued request, checked against the guard that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Monotonic generational counter that resolves request/response races.
///
/// Every fired request captures the id returned by [`RequestGuard::issue`];
/// its settlement may only commit while that id is still current. Superseding
/// never cancels the underlying call, it merely makes the eventual settlement
/// stale. [`RequestGuard::invalidate`] advances the generation without
/// issuing, so a consumer that went idle can strand whatever is in flight.
#[derive(Debug, Default)]
pub struct RequestGuard {
    current: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the generation and returns the id the next request carries.
    pub fn issue(&mut self) -> RequestId {
        self.current += 1;
        RequestId(self.current)
    }

    /// True while `id` belongs to the most recently issued generation.
    #[must_use]
    pub fn is_current(&self, id: RequestId) -> bool {
        self.current == id.0
    }

    /// Advances the generation without issuing, stranding anything in flight.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}
