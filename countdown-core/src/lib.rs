//! # Countdown Core
//!
//! Toolkit-independent model behind the circular countdown widget.
//!
//! ## Modules:
//! - `state` - `CountdownState` and the Running/Completed state machine
//! - `config` - widget configuration (colors, font size, skip mode)
//! - `color` - RGBA colors with hex (de)serialization
//! - `geometry` - draw-time layout of disk, ring, arc and label
//! - `clock` - frame-driven tick scheduler for immediate-mode hosts
//! - `driver` - tokio task that runs a countdown headlessly
//! - `error` - domain error types
//!
//! A UI host only needs `CountdownState` plus `TickClock` (to turn frame
//! times into ticks) and `CountdownGeometry` (to know where to paint).

pub mod clock;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod state;

pub use clock::TickClock;
pub use color::Rgba;
pub use config::{CountdownConfig, SkipMode};
pub use driver::CountdownTask;
pub use error::{ColorParseError, ConfigError, DriverError};
pub use geometry::{CountdownGeometry, Point};
pub use state::{
    CompletionReason, CountdownState, Phase, TickOutcome, TICKS_PER_SECOND, TICK_INTERVAL,
};
