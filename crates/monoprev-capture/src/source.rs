// monoprev-capture/src/source.rs
use crate::{CaptureError, Result};
use rand::Rng;

/// Anything that can produce one fixed-size mono frame per call.
///
/// A hardware backend would block until the next sensor frame and copy
/// it into `buf`; the synthetic sources below just compute one. The
/// sink and the rate counter never see the difference.
pub trait FrameSource {
    /// (width, height) of every frame this source produces.
    fn dimensions(&self) -> (u32, u32);

    /// Write exactly width × height bytes into the front of `buf`.
    /// A buffer shorter than one frame is a contract violation and
    /// fails with [`CaptureError::ShortBuffer`].
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Bytes per frame.
    fn frame_len(&self) -> usize {
        let (w, h) = self.dimensions();
        w as usize * h as usize
    }
}

fn checked_frame(width: u32, height: u32, buf: &[u8]) -> Result<usize> {
    let needed = width as usize * height as usize;
    if buf.len() < needed {
        return Err(CaptureError::ShortBuffer {
            needed,
            got: buf.len(),
        });
    }
    Ok(needed)
}

fn checked_dims(width: u32, height: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(CaptureError::InvalidDimensions { width, height });
    }
    Ok((width, height))
}

/// Uniform random noise, the stand-in for a live sensor.
///
/// Each sample is drawn independently from [0, 255]. Roughly what a
/// mono camera pointed at nothing looks like, and a worst case for
/// the display path since no two frames compress or dedupe.
pub struct NoiseSource {
    width: u32,
    height: u32,
}

impl NoiseSource {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height) = checked_dims(width, height)?;
        Ok(Self { width, height })
    }
}

impl FrameSource for NoiseSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let n = checked_frame(self.width, self.height, buf)?;
        rand::thread_rng().fill(&mut buf[..n]);
        Ok(())
    }
}

/// Deterministic rolling diagonal gradient.
///
/// Every call shifts the pattern by one step, so consecutive frames
/// differ but any given frame is reproducible from the phase. Used by
/// tests and demos where noise would be impossible to assert against.
pub struct GradientSource {
    width: u32,
    height: u32,
    phase: u8,
}

impl GradientSource {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height) = checked_dims(width, height)?;
        Ok(Self {
            width,
            height,
            phase: 0,
        })
    }
}

impl FrameSource for GradientSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        checked_frame(self.width, self.height, buf)?;
        let w = self.width as usize;
        for y in 0..self.height as usize {
            for x in 0..w {
                buf[y * w + x] = (x + y + self.phase as usize) as u8;
            }
        }
        self.phase = self.phase.wrapping_add(1);
        Ok(())
    }
}
