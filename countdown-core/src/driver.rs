//! # Countdown Driver
//!
//! Runs one countdown as a tokio task, for hosts that are not immediate-mode
//! UIs (headless previews, tests, terminal tools).
//!
//! ## Key Types:
//! - `CountdownTask` - handle owning the task; skip it, observe it, join it
//!
//! ## Behavior:
//! - The task sleeps one `TICK_INTERVAL` between ticks and publishes every
//!   committed state through a `watch` channel, so observers always see the
//!   latest snapshot.
//! - `skip()` is honored at the next tick, or right away with
//!   `SkipMode::Immediate`.
//! - The completion callback runs exactly once, on the task, after the last
//!   state has been published.
//! - Dropping the handle aborts the task. A countdown never outlives its owner.
//!
//! Must be called from within a tokio runtime.

use log::{debug, info};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::{CountdownConfig, SkipMode};
use crate::error::DriverError;
use crate::state::{CountdownState, TickOutcome, TICK_INTERVAL};

/// Handle to a countdown running on the tokio runtime
#[derive(Debug)]
pub struct CountdownTask {
    state_rx: watch::Receiver<CountdownState>,
    skip_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<CountdownState>>,
}

impl CountdownTask {
    /// Start a countdown described by `config`
    pub fn spawn<F>(config: &CountdownConfig, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn_with_interval(config, TICK_INTERVAL, on_complete)
    }

    /// Start a countdown ticking every `interval` instead of the standard 50 ms
    pub fn spawn_with_interval<F>(config: &CountdownConfig, interval: Duration, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let state = CountdownState::new(config.initial_value);
        let (state_tx, state_rx) = watch::channel(state.clone());
        let (skip_tx, skip_rx) = watch::channel(false);

        info!(
            "⏱️ Spawning countdown task: {} seconds, skip mode {:?}",
            state.initial_value(),
            config.skip_mode
        );

        let handle = tokio::spawn(run_countdown(
            state,
            interval,
            config.skip_mode,
            skip_rx,
            state_tx,
            on_complete,
        ));

        Self {
            state_rx,
            skip_tx,
            handle: Some(handle),
        }
    }

    /// Ask the countdown to stop early. Repeated calls have no further effect.
    pub fn skip(&self) {
        let newly_set = self.skip_tx.send_if_modified(|skip| {
            if *skip {
                false
            } else {
                *skip = true;
                true
            }
        });
        if newly_set {
            debug!("⏭️ Skip sent to countdown task");
        }
    }

    /// Latest committed state
    pub fn snapshot(&self) -> CountdownState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that is notified after every committed tick
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state_rx.clone()
    }

    /// Whether the task has returned, by completing or being aborted
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Wait for the countdown to complete and return its final state
    pub async fn join(mut self) -> Result<CountdownState, DriverError> {
        match self.handle.take() {
            Some(handle) => Ok(handle.await?),
            None => Ok(self.snapshot()),
        }
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("🛑 Countdown task dropped while running, aborting");
            }
            handle.abort();
        }
    }
}

async fn run_countdown<F>(
    mut state: CountdownState,
    interval: Duration,
    skip_mode: SkipMode,
    mut skip_rx: watch::Receiver<bool>,
    state_tx: watch::Sender<CountdownState>,
    on_complete: F,
) -> CountdownState
where
    F: FnOnce() + Send + 'static,
{
    let mut next_tick = Instant::now() + interval;
    let mut listen_for_skip = skip_mode == SkipMode::Immediate;

    loop {
        let outcome = tokio::select! {
            _ = tokio::time::sleep_until(next_tick) => {
                next_tick += interval;
                if *skip_rx.borrow() {
                    state.request_skip();
                }
                state.tick()
            }
            changed = skip_rx.changed(), if listen_for_skip => {
                if changed.is_err() {
                    listen_for_skip = false;
                    continue;
                }
                if !*skip_rx.borrow_and_update() {
                    continue;
                }
                state.complete_skip()
            }
        };

        state_tx.send_replace(state.clone());

        match outcome {
            TickOutcome::Completed(_) => {
                on_complete();
                return state;
            }
            TickOutcome::Advanced => {}
            TickOutcome::Idle => return state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CompletionReason;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_callback() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        (calls, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_second_countdown_runs_to_zero() {
        let (calls, on_complete) = counting_callback();
        let task = CountdownTask::spawn(&CountdownConfig::default(), on_complete);
        assert!(!task.is_finished());

        tokio::time::sleep(Duration::from_millis(5010)).await;
        assert!(task.is_finished());
        let state = task.join().await.unwrap();

        assert_eq!(state.remaining_seconds(), 0);
        assert_eq!(state.sweep_angle_degrees(), 0.0);
        assert_eq!(state.completion_reason(), Some(CompletionReason::Elapsed));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_after_thirty_ticks_stops_at_next_tick() {
        let (calls, on_complete) = counting_callback();
        let started = Instant::now();
        let task = CountdownTask::spawn(&CountdownConfig::with_initial_value(10), on_complete);

        tokio::time::sleep(Duration::from_millis(30 * 50 + 25)).await;
        task.skip();
        task.skip();

        let state = task.join().await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(31 * 50));
        assert_eq!(state.elapsed_ticks(), 30);
        assert_eq!(state.remaining_seconds(), 9);
        assert_eq!(state.completion_reason(), Some(CompletionReason::Skipped));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_skip_does_not_wait_for_tick() {
        let (calls, on_complete) = counting_callback();
        let config = CountdownConfig {
            initial_value: 10,
            skip_mode: SkipMode::Immediate,
            ..CountdownConfig::default()
        };
        let started = Instant::now();
        let task = CountdownTask::spawn(&config, on_complete);

        tokio::time::sleep(Duration::from_millis(30 * 50 + 25)).await;
        task.skip();
        let state = task.join().await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(30 * 50 + 25));
        assert_eq!(state.elapsed_ticks(), 30);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_every_second() {
        let (_calls, on_complete) = counting_callback();
        let task = CountdownTask::spawn(&CountdownConfig::with_initial_value(2), on_complete);
        let mut rx = task.subscribe();

        let mut seen_seconds = Vec::new();
        while rx.changed().await.is_ok() {
            let remaining = rx.borrow_and_update().remaining_seconds();
            if seen_seconds.last() != Some(&remaining) {
                seen_seconds.push(remaining);
            }
            if remaining == 0 {
                break;
            }
        }

        assert_eq!(seen_seconds, vec![2, 1, 0]);
        assert_eq!(task.snapshot().remaining_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_countdown() {
        let (calls, on_complete) = counting_callback();
        let task = CountdownTask::spawn(&CountdownConfig::with_initial_value(1), on_complete);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!task.is_finished());
        drop(task);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
