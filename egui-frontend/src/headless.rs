//! # Headless Preview
//!
//! Runs the countdown on a tokio task without opening a window and logs each
//! whole second. Ctrl-C acts as the tap: the first one skips the rest of the
//! countdown.

use anyhow::Result;
use countdown_core::CountdownTask;
use log::info;

use crate::preview_config::PreviewConfig;

pub fn run_headless(config: &PreviewConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_countdown(config))
}

async fn run_countdown(config: &PreviewConfig) -> Result<()> {
    let task = CountdownTask::spawn(&config.widget, || info!("🏁 Countdown complete"));
    let mut updates = task.subscribe();
    let mut last_second = task.snapshot().remaining_seconds();
    let mut skip_sent = false;

    info!("⏱️ {} seconds (press Ctrl-C to skip)", last_second);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if state.remaining_seconds() != last_second {
                    last_second = state.remaining_seconds();
                    info!("⏱️ {} seconds", last_second);
                }
                if state.is_completed() {
                    break;
                }
            }
            signal = tokio::signal::ctrl_c(), if !skip_sent => {
                signal?;
                info!("⏭️ Skipping countdown");
                task.skip();
                skip_sent = true;
            }
        }
    }

    let final_state = task.join().await?;
    info!(
        "✅ Finished: {:?}, {} seconds left, sweep {:.1}°",
        final_state.completion_reason(),
        final_state.remaining_seconds(),
        final_state.sweep_angle_degrees()
    );
    Ok(())
}
