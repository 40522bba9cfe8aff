//! Frame timing source and cancellable frame requests
//!
//! The host delivers a monotonically increasing timestamp each time it is
//! ready to draw. A consumer asks for the next frame with a `FrameRequest`;
//! cancelling the request guarantees a frame already in flight is ignored.

use std::time::{Duration, Instant};

/// Monotonic timestamp source
pub trait FrameClock {
    /// Time since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Jump to `at`; earlier values are ignored so time never runs backward
    pub fn set(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Handle for one pending frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues and cancels frame requests. At most one is pending at a time.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<FrameRequest>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame, superseding any pending request
    pub fn request(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Consume `request` if it is the pending one. Stale or cancelled
    /// requests return false and leave the scheduler untouched.
    pub fn consume(&mut self, request: FrameRequest) -> bool {
        if self.pending == Some(request) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
