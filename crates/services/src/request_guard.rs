use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Token handed out for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Tracks the newest request so late replies from older ones can be dropped.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier token becomes stale.
    #[must_use]
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks every outstanding token stale without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Returns `value` only if `token` is still the newest request.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            log::debug!("dropping stale response for request {}", token.0);
            None
        }
    }
}
