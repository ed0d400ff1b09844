// monoprev-capture/src/lib.rs
// ============================================================
// Frame buffer + synthetic source layer for monoprev
// Owns the per-stream byte buffer and hands it to the display
// side as a non-owning view, so no pixel data is ever copied
// between capture and render.
// ------------------------------------------------------------
// Public API:
//   * Frame::new(w, h)        – allocate one mono frame buffer
//   * Frame::view()           – borrow it as a 2D image view
//   * FrameSource::fill(buf)  – write one frame's worth of bytes
// ============================================================

//! monoprev – capture layer
//!
//! A [`Frame`] is one single-channel image's raw samples, row-major,
//! length exactly width × height. A [`FrameView`] describes how to
//! read an existing byte slice as a 2D image (dimensions, channel
//! count, row stride) without owning or copying it. [`FrameSource`]
//! is the seam where a real camera backend would plug in; the
//! implementations here are synthetic, but the contract is the one a
//! hardware SDK presents: "give me width × height bytes of
//! single-channel data".

use thiserror::Error;

mod source;
pub use source::{FrameSource, GradientSource, NoiseSource};

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("source buffer too short: need {needed} bytes, got {got}")]
    ShortBuffer { needed: usize, got: usize },
    #[error("view does not fit buffer: need {needed} bytes, got {got}")]
    ViewOutOfBounds { needed: usize, got: usize },
    #[error("row stride {stride} shorter than row width {row_bytes}")]
    BadStride { stride: usize, row_bytes: usize },
}

pub type Result<T> = std::result::Result<T, CaptureError>;

/// One monochrome frame's sample bytes, owned.
///
/// Allocated once at construction and refilled in place every
/// iteration; length is always exactly width × height.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Allocate a zeroed width × height buffer. Zero dimensions are
    /// rejected up front.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access for a [`FrameSource`] to fill in place.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow the buffer as a packed single-channel 2D view.
    pub fn view(&self) -> FrameView<'_> {
        // Length invariant holds by construction, so this cannot fail.
        FrameView {
            data: &self.data,
            width: self.width as usize,
            height: self.height as usize,
            channels: 1,
            stride: self.width as usize,
        }
    }
}

/// Non-owning 2D interpretation of an existing byte slice.
///
/// The slice must outlive the view (plain borrow). Row access never
/// reads past `stride * (height - 1) + width * channels`.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<'a> FrameView<'a> {
    /// Describe `data` as a width × height image with an explicit row
    /// stride. The descriptor is validated against the slice length so
    /// every later row access is in bounds.
    pub fn with_stride(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> Result<Self> {
        let row_bytes = width * channels;
        if stride < row_bytes {
            return Err(CaptureError::BadStride { stride, row_bytes });
        }
        let needed = if height == 0 {
            0
        } else {
            stride * (height - 1) + row_bytes
        };
        if data.len() < needed {
            return Err(CaptureError::ViewOutOfBounds {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Packed view, stride == width × channels.
    pub fn packed(data: &'a [u8], width: usize, height: usize, channels: usize) -> Result<Self> {
        Self::with_stride(data, width, height, channels, width * channels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width * self.channels
    }

    /// One row's pixel bytes, excluding any stride padding.
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row {} out of {} rows", y, self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width * self.channels]
    }

    /// The full pixel run when rows are packed back to back, `None`
    /// when stride padding would interleave garbage.
    pub fn contiguous_bytes(&self) -> Option<&'a [u8]> {
        if self.is_contiguous() {
            Some(&self.data[..self.height * self.stride])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_len_is_width_times_height() {
        let frame = Frame::new(1000, 400).expect("frame");
        assert_eq!(frame.len(), 400_000);
        assert_eq!(frame.view().height(), 400);
        assert_eq!(frame.view().stride(), 1000);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            Frame::new(0, 400),
            Err(CaptureError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Frame::new(1000, 0),
            Err(CaptureError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn view_rows_stay_in_bounds() {
        let data = vec![7u8; 6 * 4];
        let view = FrameView::packed(&data, 6, 4, 1).expect("view");
        for y in 0..view.height() {
            let row = view.row(y);
            assert_eq!(row.len(), 6);
            assert!(row.iter().all(|&b| b == 7));
        }
        assert_eq!(view.contiguous_bytes().unwrap().len(), 24);
    }

    #[test]
    fn strided_view_skips_padding() {
        // 4 wide, stride 6, 3 rows: last row needs no trailing padding.
        let data = vec![1u8; 6 * 2 + 4];
        let view = FrameView::with_stride(&data, 4, 3, 1, 6).expect("view");
        assert!(!view.is_contiguous());
        assert!(view.contiguous_bytes().is_none());
        assert_eq!(view.row(2).len(), 4);
    }

    #[test]
    fn short_buffer_rejected_by_view() {
        let data = vec![0u8; 10];
        assert!(matches!(
            FrameView::packed(&data, 6, 4, 1),
            Err(CaptureError::ViewOutOfBounds { needed: 24, got: 10 })
        ));
    }

    #[test]
    fn undersized_stride_rejected() {
        let data = vec![0u8; 24];
        assert!(matches!(
            FrameView::with_stride(&data, 6, 4, 1, 4),
            Err(CaptureError::BadStride { stride: 4, row_bytes: 6 })
        ));
    }
}
