//! monoprev – frame rate accounting.
//!
//! [`RateMonitor`] counts frames and rolls the count over once per
//! elapsed window. Timestamps are supplied by the caller, which is
//! what makes the boundary behavior testable with simulated time.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// One closed window's worth of throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateReport {
    /// Frames counted inside the window.
    pub frames: u64,
    /// How long the window actually ran. At least the configured
    /// interval, longer by however late the crossing tick arrived.
    pub window: Duration,
}

/// Frame tally with periodic rollover.
///
/// Windows are not aligned to wall-clock seconds: each one opens when
/// the previous report fires, so boundaries drift by the overrun of
/// the window before. Good enough for a coarse diagnostic, not a
/// precise meter. The comparison is strictly greater-than, and the
/// tick that crosses the boundary is counted in neither window.
#[derive(Debug)]
pub struct RateMonitor {
    interval: Duration,
    tally: u64,
    total: u64,
    window_start: Instant,
}

impl RateMonitor {
    /// Window opens now.
    pub fn new(interval: Duration) -> Self {
        Self::start_at(interval, Instant::now())
    }

    /// Window opens at `now`; tests pass a fabricated base instant.
    pub fn start_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            tally: 0,
            total: 0,
            window_start: now,
        }
    }

    /// Record one processed frame at `now`.
    ///
    /// Returns the closed window's report when `now` lands strictly
    /// past the interval, otherwise bumps the tally and returns `None`.
    pub fn tick(&mut self, now: Instant) -> Option<RateReport> {
        self.total += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed > self.interval {
            let report = RateReport {
                frames: self.tally,
                window: elapsed,
            };
            self.tally = 0;
            self.window_start = now;
            Some(report)
        } else {
            self.tally += 1;
            None
        }
    }

    /// Frames counted in the window currently open.
    pub fn tally(&self) -> u64 {
        self.tally
    }

    /// Every frame ever ticked, across all windows.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
