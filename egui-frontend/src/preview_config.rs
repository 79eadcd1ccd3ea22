//! # Preview Configuration
//!
//! Command line and config file handling for the `countdown-preview` binary.
//!
//! ## Sources (later wins):
//! 1. Built-in defaults: a 100 px, 50 second countdown with a blue arc, yellow
//!    ring, cyan disk and dark-gray 25 pt digits
//! 2. A YAML (`.yaml`/`.yml`) or JSON (`.json`) file given as the first
//!    argument or via `COUNTDOWN_PREVIEW_CONFIG`
//! 3. `--headless` on the command line
//!
//! ## YAML Format
//!
//! ```yaml
//! widget_size: 160
//! window_size: [480, 480]
//! headless: false
//! widget:
//!   initial_value: 10
//!   primary_color: "#FF8800"
//!   skip_mode: immediate
//! ```
//!
//! Fields left out of `widget` fall back to the widget's own defaults, not to
//! the preview styling.

use anyhow::{bail, Context, Result};
use clap::Parser;
use countdown_core::{CountdownConfig, Rgba};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI arguments for the preview binary
#[derive(Debug, Parser)]
#[command(name = "countdown-preview")]
#[command(about = "Preview window for the circular countdown widget")]
pub struct PreviewArgs {
    /// YAML or JSON preview configuration file
    #[arg(env = "COUNTDOWN_PREVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run the countdown in the terminal instead of opening a window
    #[arg(long)]
    pub headless: bool,
}

/// Everything the preview needs to host one countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub widget: CountdownConfig,
    /// Edge length of the square widget, in points
    pub widget_size: f32,
    /// Initial window width and height, in points
    pub window_size: [f32; 2],
    pub headless: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            widget: CountdownConfig {
                initial_value: 50,
                primary_color: Rgba::BLUE,
                secondary_color: Rgba::YELLOW,
                circle_color: Rgba::CYAN,
                font_color: Rgba::DARK_GRAY,
                font_size: 25,
                ..CountdownConfig::default()
            },
            widget_size: 100.0,
            window_size: [400.0, 400.0],
            headless: false,
        }
    }
}

impl PreviewConfig {
    /// Build the configuration from parsed command line arguments
    pub fn from_args(args: &PreviewArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => {
                debug!("No preview config given, using defaults");
                Self::default()
            }
        };

        if args.headless {
            config.headless = true;
        }

        Ok(config)
    }

    /// Load and validate a config file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preview config {:?}", path))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config: PreviewConfig = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML in {:?}", path))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {:?}", path))?,
            _ => bail!("Unsupported preview config format {:?}, expected .yaml, .yml or .json", path),
        };

        config.validate()?;
        info!("📄 Loaded preview config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.widget.validate().context("Invalid widget configuration")?;

        if !(self.widget_size.is_finite() && self.widget_size > 0.0) {
            bail!("Widget size must be positive, got {}", self.widget_size);
        }
        if self.window_size.iter().any(|side| !(side.is_finite() && *side > 0.0)) {
            bail!("Window size must be positive, got {:?}", self.window_size);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::{ConfigError, SkipMode};
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_mirror_preview_styling() {
        let config = PreviewConfig::default();

        assert_eq!(config.widget.initial_value, 50);
        assert_eq!(config.widget.primary_color, Rgba::BLUE);
        assert_eq!(config.widget.secondary_color, Rgba::YELLOW);
        assert_eq!(config.widget.circle_color, Rgba::CYAN);
        assert_eq!(config.widget.font_color, Rgba::DARK_GRAY);
        assert_eq!(config.widget.font_size, 25);
        assert_eq!(config.widget_size, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(
            ".yaml",
            "widget_size: 160\nwidget:\n  initial_value: 10\n  skip_mode: immediate\n",
        );

        let config = PreviewConfig::load(file.path()).unwrap();

        assert_eq!(config.widget_size, 160.0);
        assert_eq!(config.widget.initial_value, 10);
        assert_eq!(config.widget.skip_mode, SkipMode::Immediate);
        assert_eq!(config.widget.primary_color, Rgba::WHITE);
        assert_eq!(config.window_size, [400.0, 400.0]);
    }

    #[test]
    fn test_load_json() {
        let file = write_config(".json", r##"{"headless": true, "widget": {"font_color": "#112233"}}"##);

        let config = PreviewConfig::load(file.path()).unwrap();

        assert!(config.headless);
        assert_eq!(config.widget.font_color, Rgba::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_rejects_zero_initial_value() {
        let file = write_config(".yml", "widget:\n  initial_value: 0\n");

        let error = PreviewConfig::load(file.path()).unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroInitialValue)
        );
    }

    #[test]
    fn test_rejects_unknown_extension_and_bad_colors() {
        let toml = write_config(".toml", "headless = true\n");
        assert!(PreviewConfig::load(toml.path()).is_err());

        let bad_color = write_config(".yaml", "widget:\n  primary_color: blue\n");
        assert!(PreviewConfig::load(bad_color.path()).is_err());
    }

    #[test]
    fn test_headless_flag_overrides_file() {
        let args = PreviewArgs {
            config: None,
            headless: true,
        };

        let config = PreviewConfig::from_args(&args).unwrap();
        assert!(config.headless);
        assert_eq!(config.widget.initial_value, 50);
    }
}
