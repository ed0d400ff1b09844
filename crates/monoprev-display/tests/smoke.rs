use monoprev_capture::{Frame, FrameSource, GradientSource, NoiseSource};
use monoprev_display::DisplaySink;

// Needs a window system; run with `cargo test -- --ignored` on a desktop.
#[test]
#[ignore]
fn thirty_noise_frames_render() {
    let mut src = NoiseSource::new(1000, 400).expect("source");
    let mut frame = Frame::new(1000, 400).expect("frame");
    let mut sink = DisplaySink::new("monoprev smoke");

    for _ in 0..30 {
        src.fill(frame.as_bytes_mut()).expect("fill");
        sink.present(&frame.view()).expect("present");
    }
}

#[test]
#[ignore]
fn present_is_read_only_on_the_buffer() {
    let mut src = GradientSource::new(64, 32).expect("source");
    let mut frame = Frame::new(64, 32).expect("frame");
    let mut sink = DisplaySink::new("monoprev smoke ro");

    src.fill(frame.as_bytes_mut()).expect("fill");
    let before = frame.as_bytes().to_vec();

    // Presenting the same view twice must not mutate the frame.
    sink.present(&frame.view()).expect("present");
    sink.present(&frame.view()).expect("present");
    assert_eq!(frame.as_bytes(), before.as_slice());
}
