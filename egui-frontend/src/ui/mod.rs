//! # UI Module
//!
//! Re-exports the countdown widget and the helpers that translate
//! `countdown-core` types into egui types, so hosts can simply
//! `use countdown_egui::ui::*`.

pub mod components;
pub mod mappers;

pub use components::*;
pub use mappers::*;
