//! # Tick Clock
//!
//! Frame-driven scheduler for immediate-mode hosts such as egui. The host
//! passes in its frame timestamp (seconds as `f64`) each time it draws; the
//! clock answers how many ticks have become due since the last call and how
//! long to wait before the next one.
//!
//! The clock holds no timer of its own. Whoever owns it owns the loop, and
//! dropping the owner stops the countdown.

use std::time::Duration;

use crate::state::TICK_INTERVAL;

/// Turns frame timestamps into a steady stream of ticks
#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    interval: f64,
    started_at: Option<f64>,
    ticks_issued: u64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            started_at: None,
            ticks_issued: 0,
        }
    }

    /// Arm the clock at `now`; the first tick is due one interval later.
    ///
    /// Returns `false` if the clock was already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        self.ticks_issued = 0;
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Disarm the clock; no further ticks become due
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn ticks_issued(&self) -> u64 {
        self.ticks_issued
    }

    /// Number of ticks that became due up to `now`, marking them as issued
    pub fn due_ticks(&mut self, now: f64) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        if now <= started_at {
            return 0;
        }

        let reached = ((now - started_at) / self.interval).floor() as u64;
        let due = reached.saturating_sub(self.ticks_issued);
        self.ticks_issued += due;
        due
    }

    /// Time left until the next tick, or `None` when the clock is not running
    pub fn time_until_next(&self, now: f64) -> Option<Duration> {
        let started_at = self.started_at?;
        let next_at = started_at + (self.ticks_issued + 1) as f64 * self.interval;
        Some(Duration::from_secs_f64((next_at - now).max(0.0)))
    }
}
