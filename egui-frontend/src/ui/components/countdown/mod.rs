//! # Countdown Module
//!
//! A donut-style countdown timer: a filled disk, a background ring, a
//! progress arc that shrinks back towards 12 o'clock as time runs out, and
//! the remaining whole seconds in the middle. Tapping the widget skips the
//! rest of the countdown.
//!
//! ## Key Components:
//! - `widget.rs` - `CountdownWidget`, owns state, clock and completion callback
//! - `renderer.rs` - painting with egui primitives, read-only over the state

pub mod renderer;
pub mod widget;

pub use renderer::paint_countdown;
pub use widget::CountdownWidget;
