//! # Countdown egui
//!
//! egui rendition of the circular countdown timer. The widget lives in
//! `ui::components::countdown`; the `countdown-preview` binary hosts it in a
//! window for manual testing.
//!
//! ## Usage:
//! ```rust,no_run
//! use countdown_egui::ui::CountdownWidget;
//! use countdown_core::CountdownConfig;
//!
//! let mut countdown = CountdownWidget::new(CountdownConfig::default(), || {
//!     log::info!("done");
//! });
//! // inside an egui frame:
//! // countdown.show(ui);
//! ```

pub mod ui;
