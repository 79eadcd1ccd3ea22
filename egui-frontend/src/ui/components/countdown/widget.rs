//! # Countdown Widget
//!
//! egui widget owning one countdown run.
//!
//! ## Frame Flow:
//! 1. Allocate the widget rect with click sensing
//! 2. On the first frame, arm the tick clock (mount)
//! 3. Turn a click into a skip request
//! 4. Apply every tick that became due since the last frame
//! 5. Ask egui to repaint when the next tick is due
//! 6. Paint the current state
//!
//! The clock lives inside the widget, so dropping the widget stops the
//! countdown; nothing keeps ticking in the background.

use countdown_core::{CountdownConfig, CountdownState, SkipMode, TickClock, TickOutcome};
use eframe::egui;
use log::info;

use super::renderer::paint_countdown;

/// Circular countdown timer with tap-to-skip
pub struct CountdownWidget {
    config: CountdownConfig,
    state: CountdownState,
    clock: TickClock,
    on_complete: Option<Box<dyn FnOnce()>>,
    desired_size: Option<egui::Vec2>,
}

impl CountdownWidget {
    /// Create a countdown; `on_complete` runs once when it ends or is skipped
    pub fn new(config: CountdownConfig, on_complete: impl FnOnce() + 'static) -> Self {
        let state = CountdownState::new(config.initial_value);
        Self {
            config,
            state,
            clock: TickClock::default(),
            on_complete: Some(Box::new(on_complete)),
            desired_size: None,
        }
    }

    /// Fix the widget size instead of filling the available space
    pub fn with_size(mut self, size: egui::Vec2) -> Self {
        self.desired_size = Some(size);
        self
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.clock.is_started() || self.state.is_completed()
    }

    /// Same effect as tapping the widget
    pub fn skip(&mut self) {
        match self.config.skip_mode {
            SkipMode::NextTick => {
                self.state.request_skip();
            }
            SkipMode::Immediate => {
                if let TickOutcome::Completed(_) = self.state.complete_skip() {
                    self.complete();
                }
            }
        }
    }

    /// Advance, handle input and paint for this frame
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let size = self.desired_size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let now = ui.input(|i| i.time);

        if self.state.is_running() && self.clock.start(now) {
            info!(
                "⏱️ Countdown mounted: {} seconds at t={:.3}",
                self.state.initial_value(),
                now
            );
        }

        if response.clicked() {
            self.skip();
        }

        self.advance(now);

        if let Some(wait) = self.clock.time_until_next(now) {
            ui.ctx().request_repaint_after(wait);
        }

        if ui.is_rect_visible(rect) {
            paint_countdown(ui.painter(), rect, &self.state, &self.config);
        }

        if self.state.is_running() {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response
        }
    }

    /// Apply the ticks that became due up to `now`
    fn advance(&mut self, now: f64) {
        let due = self.clock.due_ticks(now);
        for _ in 0..due {
            match self.state.tick() {
                TickOutcome::Advanced => {}
                TickOutcome::Completed(_) => {
                    self.complete();
                    break;
                }
                TickOutcome::Idle => break,
            }
        }
    }

    fn complete(&mut self) {
        self.clock.stop();
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl egui::Widget for &mut CountdownWidget {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.show(ui)
    }
}
