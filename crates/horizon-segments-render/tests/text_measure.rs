//! Text measurement against the system font database.

use horizon_segments_render::{ApproximateTextMeasure, CosmicTextMeasure, TextMeasure};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_segments_render=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn cosmic_measure_is_whole_pixels_and_monotonic() {
    init_logging();
    let measure = CosmicTextMeasure::new();

    let short = measure.measure("Tab", false, 12.0);
    let long = measure.measure("Tab Tab Tab", false, 12.0);

    assert_eq!(short.width, short.width.ceil());
    assert_eq!(short.height, short.height.ceil());
    assert!(long.width >= short.width);
    assert!(short.height > 0.0);
}

#[test]
fn approximation_ignores_weight() {
    init_logging();
    let measure = ApproximateTextMeasure::new();
    let normal = measure.measure("Segment", false, 14.0);
    let bold = measure.measure("Segment", true, 14.0);
    assert_eq!(normal, bold);
}

#[test]
fn measurers_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CosmicTextMeasure>();
    assert_send_sync::<ApproximateTextMeasure>();
}
