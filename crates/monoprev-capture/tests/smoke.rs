use monoprev_capture::{Frame, FrameSource, GradientSource, NoiseSource};

#[test]
fn fill_covers_arbitrary_dimensions() {
    for (w, h) in [(1, 1), (3, 7), (64, 64), (1000, 400)] {
        let mut src = NoiseSource::new(w, h).expect("source");
        let mut frame = Frame::new(w, h).expect("frame");
        assert_eq!(frame.len(), (w * h) as usize);
        src.fill(frame.as_bytes_mut()).expect("fill");
        assert_eq!(src.frame_len(), frame.len());
    }
}

#[test]
fn default_dimensions_thirty_frames() {
    // The viewer's stock stream: 1000x400 mono, refilled in place.
    let mut src = NoiseSource::new(1000, 400).expect("source");
    let mut frame = Frame::new(1000, 400).expect("frame");
    for _ in 0..30 {
        src.fill(frame.as_bytes_mut()).expect("fill");
        let view = frame.view();
        assert_eq!(view.width() * view.height(), 400_000);
        assert_eq!(view.channels(), 1);
        assert!(view.is_contiguous());
        // Touch first and last rows through the view.
        assert_eq!(view.row(0).len(), 1000);
        assert_eq!(view.row(399).len(), 1000);
    }
}

#[test]
fn gradient_frames_advance() {
    let mut src = GradientSource::new(32, 16).expect("source");
    let mut frame = Frame::new(32, 16).expect("frame");
    src.fill(frame.as_bytes_mut()).expect("fill");
    let first = frame.as_bytes().to_vec();
    src.fill(frame.as_bytes_mut()).expect("fill");
    assert_ne!(first, frame.as_bytes());
}
