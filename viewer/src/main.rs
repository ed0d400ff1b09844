//! Live mono preview: synthetic frames into a window, one `FPS: <n>`
//! line per elapsed second. Swap [`NoiseSource`] for a real capture
//! backend and nothing downstream changes.

use anyhow::{Context, Result};
use log::info;
use monoprev_capture::{Frame, FrameSource, NoiseSource};
use monoprev_display::{DisplaySink, Key};
use monoprev_rate::RateMonitor;
use serde::{Deserialize, Serialize};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::Arc,
    time::{Duration, Instant},
};

/// Viewer settings. No CLI or config-file parsing; everything ships
/// with fixed defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewerConfig {
    width: u32,
    height: u32,
    window_title: String,
    report_interval_secs: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 400,
            window_title: "Synthetic Live Feed".to_string(),
            report_interval_secs: 1,
        }
    }
}

impl ViewerConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("invalid frame dimensions {}x{}", self.width, self.height);
        }
        if self.report_interval_secs == 0 {
            anyhow::bail!("report interval must be at least one second");
        }
        Ok(())
    }

    fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // 1) Validate configuration before touching the window system
    let config = ViewerConfig::default();
    config.validate()?;

    // 2) Source, frame buffer, sink, rate counter
    let mut source = NoiseSource::new(config.width, config.height)?;
    let mut frame = Frame::new(config.width, config.height)?;
    let mut sink = DisplaySink::new(config.window_title.clone());
    let mut monitor = RateMonitor::new(config.report_interval());

    // 3) Ctrl-C flips the stop flag; the loop notices on the next
    //    iteration boundary
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Error registering Ctrl-C handler")?;

    info!(
        "streaming {}x{} synthetic frames to '{}'",
        config.width, config.height, config.window_title
    );

    // 4) Capture -> display -> count, until stopped
    while running.load(Ordering::SeqCst) {
        source.fill(frame.as_bytes_mut())?;

        let key = sink
            .present(&frame.view())
            .context("display surface failed")?;
        if matches!(key, Some(Key::Esc) | Some(Key::Char('q'))) {
            info!("stop key received");
            break;
        }

        if let Some(report) = monitor.tick(Instant::now()) {
            println!("FPS: {}", report.frames);
        }
    }

    info!("stopped after {} frames", monitor.total_frames());
    Ok(())
}
