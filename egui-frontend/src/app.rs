//! # Preview App
//!
//! eframe application hosting a single countdown widget centered in the
//! window. Below the widget it shows whether the countdown is still running
//! and offers a restart button once it has finished. Restarting drops the old
//! widget and mounts a fresh one.

use countdown_core::SkipMode;
use countdown_egui::ui::CountdownWidget;
use eframe::egui;
use log::info;
use std::cell::Cell;
use std::rc::Rc;

use crate::preview_config::PreviewConfig;

pub struct CountdownPreviewApp {
    config: PreviewConfig,
    countdown: CountdownWidget,
    completed: Rc<Cell<bool>>,
    runs: u32,
}

impl CountdownPreviewApp {
    pub fn new(config: PreviewConfig) -> Self {
        let completed = Rc::new(Cell::new(false));
        let countdown = build_countdown(&config, completed.clone());
        info!("🚀 Preview ready: {} second countdown", config.widget.initial_value);

        Self {
            config,
            countdown,
            completed,
            runs: 1,
        }
    }

    fn restart(&mut self) {
        self.completed.set(false);
        self.countdown = build_countdown(&self.config, self.completed.clone());
        self.runs += 1;
        info!("🔁 Countdown restarted (run {})", self.runs);
    }

    fn status_text(&self) -> String {
        if self.completed.get() {
            format!("Finished with {} seconds left", self.countdown.state().remaining_seconds())
        } else {
            match self.countdown.config().skip_mode {
                SkipMode::NextTick => "Tap the timer to skip".to_string(),
                SkipMode::Immediate => "Tap the timer to stop it now".to_string(),
            }
        }
    }
}

fn build_countdown(config: &PreviewConfig, completed: Rc<Cell<bool>>) -> CountdownWidget {
    CountdownWidget::new(config.widget.clone(), move || {
        info!("🏁 Countdown complete");
        completed.set(true);
    })
    .with_size(egui::vec2(config.widget_size, config.widget_size))
}

impl eframe::App for CountdownPreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let status_height = 60.0;
            let top_space = (ui.available_height() - self.config.widget_size - status_height) / 2.0;

            ui.vertical_centered(|ui| {
                ui.add_space(top_space.max(0.0));
                ui.add(&mut self.countdown);

                ui.add_space(12.0);
                ui.label(self.status_text());

                if self.completed.get() && ui.button("Restart").clicked() {
                    self.restart();
                }
            });
        });
    }
}
