//! Loading and saving styles on disk.

use std::time::Duration;

use horizon_segments::prelude::*;
use horizon_segments::widget::StripStyle;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_segments=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn style_survives_a_file_round_trip() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("segments.toml");

    let mut style = SegmentControlStyle::default();
    style.indicator = IndicatorStyle::Strip;
    style.distribution = Distribution::Right;
    style.separator.enabled = true;
    style.separator.color = Color::from_rgb8(0x33, 0x33, 0x33);
    style.animation.duration = Duration::from_millis(250);
    style.strip = StripStyle {
        location: StripLocation::Up,
        colors: vec![Color::RED, Color::GREEN],
        ..StripStyle::default()
    };

    style.save_toml_file(&path).unwrap();
    let loaded = SegmentControlStyle::from_toml_file(&path).unwrap();

    assert_eq!(loaded, style);
}

#[test]
fn missing_file_reports_its_path() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match SegmentControlStyle::from_toml_file(&path) {
        Err(StyleError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn invalid_values_are_rejected() {
    init_logging();
    let err = SegmentControlStyle::from_toml_str("[cover]\nopacity = 1.5\n").unwrap_err();
    assert!(matches!(err, StyleError::Invalid { field: "cover.opacity", .. }));

    let err = SegmentControlStyle::from_toml_str("indicator = \"sparkle\"\n").unwrap_err();
    assert!(matches!(err, StyleError::Parse(_)));
}

#[test]
fn loaded_style_drives_a_control() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.toml");
    std::fs::write(
        &path,
        "indicator = \"strip\"\n\n[slideway]\nenabled = true\n\n[separator]\nenabled = true\n",
    )
    .unwrap();

    let style = SegmentControlStyle::from_toml_file(&path).unwrap();
    let mut control = SegmentControl::headless(
        Size::new(300.0, 40.0),
        std::sync::Arc::new(ApproximateTextMeasure::new()),
    )
    .with_style(style);
    control.set_segments(["One", "Two"]);
    control.layout();

    let roles: Vec<LayerRole> = control
        .scene()
        .layers()
        .iter()
        .map(|layer| layer.role())
        .collect();
    assert_eq!(
        roles,
        vec![
            LayerRole::Content(0),
            LayerRole::Content(1),
            LayerRole::Slideway,
            LayerRole::Strip,
            LayerRole::Separator,
        ]
    );
}
