//! monoprev – display layer
//!
//! [`DisplaySink`] owns one named highgui window and repaints it with
//! whatever [`FrameView`] it is handed. The view's bytes are wrapped
//! in a borrowed `Mat` header, so presenting a frame copies nothing
//! and never writes through the buffer. Each `present` also pumps the
//! UI event queue for a bounded 1 ms, which is what keeps the window
//! responsive without ever blocking the capture loop.

use monoprev_capture::FrameView;
use opencv::{core::Mat, highgui};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("OpenCV call failed: {0}")]
    OpenCv(#[from] opencv::Error),
    #[error("unsupported frame layout: {0}")]
    UnsupportedLayout(String),
}

pub type Result<T> = std::result::Result<T, DisplayError>;

/// A key reported by the event pump during `present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Esc,
    Char(char),
    Other(i32),
}

impl Key {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => None,
            27 => Some(Key::Esc),
            c if (32..127).contains(&c) => Some(Key::Char(c as u8 as char)),
            c => Some(Key::Other(c)),
        }
    }
}

// waitKey's bounded poll; 0 would block until a keypress.
const PUMP_WAIT_MS: i32 = 1;

/// One titled on-screen surface, created on first use and reused.
pub struct DisplaySink {
    title: String,
    window_created: bool,
}

impl DisplaySink {
    /// Names the surface. The window itself is only created by the
    /// first [`present`](Self::present), so construction cannot fail
    /// and headless callers pay nothing until they render.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window_created: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn ensure_window(&mut self) -> Result<()> {
        if !self.window_created {
            highgui::named_window(&self.title, highgui::WINDOW_AUTOSIZE)?;
            self.window_created = true;
        }
        Ok(())
    }

    /// Render the view and pump UI events once.
    ///
    /// The view must be packed single-channel; that is the only layout
    /// the mono preview produces. Returns the key pressed during the
    /// pump, if any. Window-system failures are fatal to the caller.
    pub fn present(&mut self, view: &FrameView<'_>) -> Result<Option<Key>> {
        if view.channels() != 1 {
            return Err(DisplayError::UnsupportedLayout(format!(
                "expected 1 channel, got {}",
                view.channels()
            )));
        }
        let data = view.contiguous_bytes().ok_or_else(|| {
            DisplayError::UnsupportedLayout(format!(
                "stride {} leaves padding between rows",
                view.stride()
            ))
        })?;

        self.ensure_window()?;

        // Borrowed Mat header over the frame's bytes: width/height/type
        // metadata only, no pixel copy. Rebuilt per call; it allocates
        // nothing.
        let mat = Mat::new_rows_cols_with_data(view.height() as i32, view.width() as i32, data)?;
        highgui::imshow(&self.title, &*mat)?;

        let code = highgui::wait_key(PUMP_WAIT_MS)?;
        Ok(Key::from_code(code))
    }
}

impl Drop for DisplaySink {
    fn drop(&mut self) {
        if self.window_created {
            let _ = highgui::destroy_window(&self.title);
        }
    }
}
