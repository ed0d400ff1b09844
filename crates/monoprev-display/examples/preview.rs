//! Minimal synthetic preview: noise frames into a window with a
//! once-per-second FPS line.
//!
//! Usage: cargo run --example preview

use anyhow::Result;
use monoprev_capture::{Frame, FrameSource, NoiseSource};
use monoprev_display::{DisplaySink, Key};
use monoprev_rate::RateMonitor;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    let (width, height) = (640, 480);
    println!("monoprev preview {}x{}", width, height);
    println!("Press ESC to quit");

    let mut source = NoiseSource::new(width, height)?;
    let mut frame = Frame::new(width, height)?;
    let mut sink = DisplaySink::new("monoprev preview");
    let mut monitor = RateMonitor::new(Duration::from_secs(1));

    loop {
        source.fill(frame.as_bytes_mut())?;
        if let Some(Key::Esc) = sink.present(&frame.view())? {
            break;
        }
        if let Some(report) = monitor.tick(Instant::now()) {
            println!("FPS: {}", report.frames);
        }
    }

    println!("done after {} frames", monitor.total_frames());
    Ok(())
}
