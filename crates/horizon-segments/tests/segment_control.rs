//! End-to-end behaviour of the segmented control on a headless surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use horizon_segments::prelude::*;
use horizon_segments::widget::{LayoutEngine, LayoutRegime, SegmentModel};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_segments=trace,horizon_segments_core=debug")
        .with_test_writer()
        .try_init();
}

/// Ten points per character, so "AAAAAA" is 60 wide.
fn measure() -> Arc<dyn TextMeasure> {
    Arc::new(ApproximateTextMeasure::with_advance_ratio(1.0))
}

fn style(distribution: Distribution) -> SegmentControlStyle {
    let mut style = SegmentControlStyle::default();
    style.distribution = distribution;
    style.segment.insets = EdgeInsets::ZERO;
    style.segment.font_size = 10.0;
    style
}

fn control(width: f32, style: SegmentControlStyle) -> SegmentControl {
    SegmentControl::headless(Size::new(width, 40.0), measure()).with_style(style)
}

const SIXTY_SEVENTY_NINETY: [&str; 3] = ["AAAAAA", "BBBBBBB", "CCCCCCCCC"];

fn frames(control: &SegmentControl) -> Vec<(f32, f32)> {
    control
        .segments()
        .iter()
        .map(|segment| (segment.frame().left(), segment.frame().width()))
        .collect()
}

#[derive(Default)]
struct CountingDelegate {
    calls: AtomicUsize,
    last: Mutex<Option<(i32, i32)>>,
}

impl SegmentControlDelegate for CountingDelegate {
    fn selection_changed(&self, _control: &dyn SegmentAccess, new_index: i32, old_index: i32) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((new_index, old_index));
    }
}

#[test]
fn left_distribution_keeps_natural_widths() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Left));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    control.layout();

    assert_eq!(frames(&control), vec![(0.0, 60.0), (60.0, 70.0), (130.0, 90.0)]);
    assert_eq!(control.layout_result().content_size.width, 220.0);
    assert_eq!(
        control.layout_result().regime,
        LayoutRegime::Distributed(Distribution::Left)
    );
}

#[test]
fn average_distribution_stretches_all_small_segments() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Average));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    control.layout();

    assert_eq!(
        frames(&control),
        vec![(0.0, 100.0), (100.0, 100.0), (200.0, 100.0)]
    );
    assert_eq!(control.viewport().content_size(), Size::new(300.0, 40.0));
}

#[test]
fn average_distribution_fills_container_with_separators() {
    init_logging();
    let mut style = style(Distribution::Average);
    style.separator.enabled = true;
    let measure = ApproximateTextMeasure::with_advance_ratio(1.0);

    for words in [
        vec!["A", "BB", "CCCCCCCCCCCC"],
        vec!["AAAA", "BBBBB", "CC", "D"],
        vec!["AAAAAAAAAAAAA", "B"],
    ] {
        let config = style.layout_config(Size::new(320.0, 40.0));
        let mut segments: Vec<SegmentModel> = words
            .iter()
            .map(|&word| SegmentModel::new(word.into()))
            .collect();
        let result = LayoutEngine::new(&measure).layout(&mut segments, &config);

        let used: f32 = segments
            .iter()
            .map(|segment| segment.width() + config.separator_space())
            .sum();
        assert!((used - 320.0).abs() < 1e-3, "{words:?} used {used}");
        assert_eq!(result.content_size.width, 320.0);
    }
}

#[test]
fn layout_is_idempotent() {
    init_logging();
    let mut style = style(Distribution::Center);
    style.separator.enabled = true;
    let mut control = control(400.0, style);
    control.set_segments(SIXTY_SEVENTY_NINETY);

    control.layout();
    let first = (frames(&control), *control.layout_result(), control.scene().clone());
    control.layout();
    let second = (frames(&control), *control.layout_result(), control.scene().clone());

    assert_eq!(first, second);
}

#[test]
fn overflowing_track_scrolls_only_on_animated_changes() {
    init_logging();
    let mut control = control(100.0, style(Distribution::Left));
    control.set_segments(SIXTY_SEVENTY_NINETY);

    // The first selection has no previous indicator to animate from.
    control.set_selected_index(2);
    assert_eq!(control.viewport().last_request(), None);
    assert!(!control.surface().last_transaction().unwrap().is_animated());

    control.set_selected_index(0);
    control.set_selected_index(2);
    let (_, animated) = control.viewport().last_request().unwrap();
    assert!(animated);
    assert_eq!(control.viewport().content_offset().x, 120.0);
}

#[test]
fn strip_colour_cycles_with_index() {
    init_logging();
    let mut style = style(Distribution::Left);
    style.indicator = IndicatorStyle::Strip;
    style.strip.colors = vec![Color::RED, Color::GREEN, Color::BLUE];
    let mut control = control(600.0, style);
    control.set_segments(["A", "B", "C", "D", "E", "F"]);

    control.set_selected_index(5);

    match control.scene().layer(LayerRole::Strip).map(|layer| layer.primitive()) {
        Some(Primitive::Fill { color, .. }) => assert_eq!(*color, Color::BLUE),
        other => panic!("unexpected strip primitive {other:?}"),
    }
}

#[test]
fn reselecting_notifies_once() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Left));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    let delegate = Arc::new(CountingDelegate::default());
    control.set_delegate(&delegate);
    let emitted = Arc::new(AtomicUsize::new(0));
    let emitted_clone = emitted.clone();
    control.value_changed.connect(move |_| {
        emitted_clone.fetch_add(1, Ordering::SeqCst);
    });

    control.set_selected_index(1);
    control.set_selected_index(1);

    assert_eq!(delegate.calls.load(Ordering::SeqCst), 1);
    assert_eq!(emitted.load(Ordering::SeqCst), 1);
    assert_eq!(*delegate.last.lock().unwrap(), Some((1, -1)));
}

#[test]
fn out_of_range_selection_collapses_silently() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Left));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    let delegate = Arc::new(CountingDelegate::default());
    control.set_delegate(&delegate);

    control.set_selected_index(1);
    control.set_selected_index(7);

    let cover = control.scene().layer(LayerRole::Cover).unwrap().frame();
    assert_eq!(cover.width(), 0.0);
    assert_eq!(cover.left(), 60.0);
    assert_eq!(control.selected_index(), 7);
    assert_eq!(delegate.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn touch_maps_through_centre_inset() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Center));
    control.set_segments(SIXTY_SEVENTY_NINETY);

    // 80 points of spare width, half of it leading.
    assert_eq!(control.touch_released(Point::new(40.0 + 65.0, 20.0)), Some(1));
    assert_eq!(control.selected_index(), 1);
    assert_eq!(control.touch_released(Point::new(20.0, 20.0)), None);
    assert_eq!(control.touch_released(Point::new(40.0 + 219.0, 20.0)), Some(2));
}

#[test]
fn touch_maps_through_right_inset() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Right));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    control.layout();

    // All 80 points of spare width sit before the first segment.
    assert_eq!(control.viewport().content_inset().left, 80.0);
    assert_eq!(control.viewport().content_offset().x, -80.0);
    assert_eq!(frames(&control), vec![(0.0, 60.0), (60.0, 70.0), (130.0, 90.0)]);

    assert_eq!(control.touch_released(Point::new(40.0, 20.0)), None);
    assert_eq!(control.selected_index(), -1);
    assert_eq!(control.touch_released(Point::new(80.0 + 5.0, 20.0)), Some(0));
    assert_eq!(control.touch_released(Point::new(80.0 + 150.0, 20.0)), Some(2));
    assert_eq!(control.selected_index(), 2);
}

#[test]
fn emptying_segments_clears_selection() {
    init_logging();
    let mut control = control(300.0, style(Distribution::Left));
    control.set_segments(SIXTY_SEVENTY_NINETY);
    control.set_selected_index(2);

    control.set_segments(Vec::<&str>::new());

    assert_eq!(control.selected_index(), -1);
    assert!(control.selected_segment().is_none());
    assert_eq!(control.touch_released(Point::new(10.0, 10.0)), None);
}
