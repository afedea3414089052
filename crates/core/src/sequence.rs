//! Stale-response bookkeeping for in-flight fetches
//!
//! Selection changes can overlap: a second fetch may be issued while the
//! first is still pending, and the first may resolve last. Each fetch
//! carries a [`RequestToken`]; a resolved response may only be rendered
//! while its token is still the latest issued one.

/// Identity of one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Hands out one token per fetch and remembers the newest
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Create a sequence with no fetches issued yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch, superseding every earlier token
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` belongs to the most recently issued fetch
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
