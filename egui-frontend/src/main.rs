use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use log::info;

mod app;
mod headless;
mod preview_config;

use app::CountdownPreviewApp;
use preview_config::{PreviewArgs, PreviewConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting countdown preview");

    let args = PreviewArgs::parse();
    let config = PreviewConfig::from_args(&args).context("Failed to load preview config")?;

    if config.headless {
        return headless::run_headless(&config).context("Headless countdown failed");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([config.widget_size + 40.0, config.widget_size + 100.0])
            .with_title("Countdown Preview")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Countdown Preview",
        options,
        Box::new(move |_cc| Ok(Box::new(CountdownPreviewApp::new(config)))),
    )
    .map_err(|e| anyhow!("Preview window failed: {}", e))
}
