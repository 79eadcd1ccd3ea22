//! # Countdown Configuration
//!
//! Visual and behavioral options for one countdown widget. Every field has a
//! default, so a config file only needs to name what it changes.
//!
//! ## YAML Format
//!
//! ```yaml
//! initial_value: 50
//! primary_color: "#0000FF"
//! secondary_color: "#FFFF00"
//! circle_color: "#00FFFF"
//! font_color: "#444444"
//! font_size: 25
//! skip_mode: next_tick
//! ```
//!
//! The completion callback is not part of the config; it is handed to the
//! widget (or driver) directly.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::state::TICKS_PER_SECOND;

/// Largest accepted initial value; keeps `initial_value * TICKS_PER_SECOND` in range
pub const MAX_INITIAL_VALUE: u32 = u32::MAX / TICKS_PER_SECOND;

/// When a tap ends the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipMode {
    /// Skip is honored at the next tick boundary
    #[default]
    NextTick,
    /// Skip completes the countdown as soon as it is requested
    Immediate,
}

/// Configuration for a countdown widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Whole seconds to count down from
    pub initial_value: u32,
    /// Progress arc color
    pub primary_color: Rgba,
    /// Background ring color
    pub secondary_color: Rgba,
    /// Full disk color
    pub circle_color: Rgba,
    /// Digit label color
    pub font_color: Rgba,
    /// Digit label size
    pub font_size: u32,
    pub skip_mode: SkipMode,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            initial_value: 5,
            primary_color: Rgba::WHITE,
            secondary_color: Rgba::DARK_GRAY,
            circle_color: Rgba::DARK_GRAY,
            font_color: Rgba::WHITE,
            font_size: 15,
            skip_mode: SkipMode::NextTick,
        }
    }
}

impl CountdownConfig {
    /// Config with the default styling and the given duration
    pub fn with_initial_value(initial_value: u32) -> Self {
        Self {
            initial_value,
            ..Self::default()
        }
    }

    /// Check the config for values the widget cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_value == 0 {
            return Err(ConfigError::ZeroInitialValue);
        }
        if self.initial_value > MAX_INITIAL_VALUE {
            return Err(ConfigError::InitialValueTooLarge {
                max: MAX_INITIAL_VALUE,
            });
        }
        if self.font_size == 0 {
            return Err(ConfigError::ZeroFontSize);
        }
        Ok(())
    }

    pub fn font_size_f32(&self) -> f32 {
        self.font_size as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_contract() {
        let config = CountdownConfig::default();
        assert_eq!(config.initial_value, 5);
        assert_eq!(config.primary_color, Rgba::WHITE);
        assert_eq!(config.secondary_color, Rgba::DARK_GRAY);
        assert_eq!(config.circle_color, Rgba::DARK_GRAY);
        assert_eq!(config.font_color, Rgba::WHITE);
        assert_eq!(config.font_size, 15);
        assert_eq!(config.skip_mode, SkipMode::NextTick);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        assert_eq!(
            CountdownConfig::with_initial_value(0).validate(),
            Err(ConfigError::ZeroInitialValue)
        );
        assert_eq!(
            CountdownConfig::with_initial_value(MAX_INITIAL_VALUE + 1).validate(),
            Err(ConfigError::InitialValueTooLarge { max: MAX_INITIAL_VALUE })
        );

        let config = CountdownConfig {
            font_size: 0,
            ..CountdownConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFontSize));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = "initial_value: 50\nprimary_color: \"#0000FF\"\nskip_mode: immediate\n";
        let config: CountdownConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.initial_value, 50);
        assert_eq!(config.primary_color, Rgba::BLUE);
        assert_eq!(config.skip_mode, SkipMode::Immediate);
        assert_eq!(config.font_size, 15);
        assert_eq!(config.circle_color, Rgba::DARK_GRAY);
    }
}
