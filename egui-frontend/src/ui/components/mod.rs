//! # UI Components Module
//!
//! ## Module Organization:
//! - `countdown` - circular countdown widget (state pumping, input, painting)

pub mod countdown;

pub use countdown::{paint_countdown, CountdownWidget};
