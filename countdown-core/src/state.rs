//! # Countdown State
//!
//! The single state record behind one countdown run, together with the
//! Running → Completed state machine that advances it.
//!
//! ## Timing Model:
//! A run of `initial_value` seconds is split into `initial_value * 20` ticks,
//! one every 50 ms. Each tick moves the progress arc a little further and every
//! 20th tick takes one second off the label.
//!
//! ## Skipping:
//! `request_skip()` only raises a flag. The next `tick()` sees the flag and
//! completes the run without consuming another tick, so the arc freezes
//! where it was when the user tapped. `complete_skip()` ends the run at once
//! for hosts that do not want to wait for the tick boundary.

use log::{debug, info, warn};
use std::time::Duration;

use crate::config::MAX_INITIAL_VALUE;

/// Animation steps per second of countdown
pub const TICKS_PER_SECOND: u32 = 20;

/// Delay between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Why a countdown stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// Every tick was consumed
    Elapsed,
    /// The user asked to skip the rest
    Skipped,
}

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Terminal; no further ticks change anything
    Completed(CompletionReason),
}

/// Result of advancing the countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One tick consumed, still running
    Advanced,
    /// This tick ended the run; the completion callback is due now
    Completed(CompletionReason),
    /// The run had already ended before this tick
    Idle,
}

/// All mutable state of one countdown run
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownState {
    initial_value: u32,
    remaining_seconds: u32,
    total_ticks: u32,
    ticks_remaining: u32,
    sweep_angle_degrees: f32,
    skip_requested: bool,
    phase: Phase,
}

impl CountdownState {
    /// Create a fresh running countdown of `initial_value` seconds.
    ///
    /// A zero duration would make the angle interpolation divide by zero, so
    /// it is clamped to one second.
    pub fn new(initial_value: u32) -> Self {
        let initial_value = if initial_value == 0 {
            warn!("⚠️ Countdown initial value 0 is not usable, clamping to 1 second");
            1
        } else if initial_value > MAX_INITIAL_VALUE {
            warn!(
                "⚠️ Countdown initial value {} is too large, clamping to {} seconds",
                initial_value, MAX_INITIAL_VALUE
            );
            MAX_INITIAL_VALUE
        } else {
            initial_value
        };

        let total_ticks = initial_value * TICKS_PER_SECOND;

        Self {
            initial_value,
            remaining_seconds: initial_value,
            total_ticks,
            ticks_remaining: total_ticks,
            sweep_angle_degrees: -360.0,
            skip_requested: false,
            phase: Phase::Running,
        }
    }

    pub fn initial_value(&self) -> u32 {
        self.initial_value
    }

    /// Whole seconds shown on the label
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.total_ticks - self.ticks_remaining
    }

    /// Extent of the progress arc, from -360 (untouched) to 0 (fully consumed)
    pub fn sweep_angle_degrees(&self) -> f32 {
        self.sweep_angle_degrees
    }

    /// Fraction of the countdown consumed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.elapsed_ticks() as f32 / self.total_ticks as f32
    }

    pub fn skip_requested(&self) -> bool {
        self.skip_requested
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_completed(&self) -> bool {
        !self.is_running()
    }

    pub fn completion_reason(&self) -> Option<CompletionReason> {
        match self.phase {
            Phase::Running => None,
            Phase::Completed(reason) => Some(reason),
        }
    }

    /// Raise the skip flag. Returns `true` only the first time.
    pub fn request_skip(&mut self) -> bool {
        if self.skip_requested || self.is_completed() {
            return false;
        }
        self.skip_requested = true;
        debug!(
            "⏭️ Skip requested with {} seconds ({} ticks) left",
            self.remaining_seconds, self.ticks_remaining
        );
        true
    }

    /// Raise the skip flag and end the run right away.
    ///
    /// Returns `Completed(Skipped)` if this call ended the run, `Idle` otherwise.
    pub fn complete_skip(&mut self) -> TickOutcome {
        if self.is_completed() {
            return TickOutcome::Idle;
        }
        self.skip_requested = true;
        self.finish(CompletionReason::Skipped)
    }

    /// Advance the countdown by one tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_completed() {
            return TickOutcome::Idle;
        }

        if self.skip_requested {
            return self.finish(CompletionReason::Skipped);
        }

        self.ticks_remaining -= 1;
        self.sweep_angle_degrees = sweep_angle(self.total_ticks, self.ticks_remaining);

        if self.ticks_remaining % TICKS_PER_SECOND == 0 {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            debug!("⏱️ {} seconds remaining", self.remaining_seconds);
        }

        if self.ticks_remaining == 0 {
            return self.finish(CompletionReason::Elapsed);
        }

        TickOutcome::Advanced
    }

    fn finish(&mut self, reason: CompletionReason) -> TickOutcome {
        self.phase = Phase::Completed(reason);
        info!(
            "✅ Countdown completed ({:?}) with {} seconds remaining",
            reason, self.remaining_seconds
        );
        TickOutcome::Completed(reason)
    }
}

/// Linear interpolation from -360° at the start to 0° when all ticks are consumed
fn sweep_angle(total_ticks: u32, ticks_remaining: u32) -> f32 {
    let elapsed = f64::from(total_ticks - ticks_remaining);
    (-360.0 + elapsed * 360.0 / f64::from(total_ticks)) as f32
}
