//! Segment layout.
//!
//! A layout pass measures every segment, gives it a natural width, and then
//! decides how the row of segments (the *track*) sits in the container:
//!
//! - If the track is at least as wide as the container, segments keep their
//!   natural widths and the content scrolls.
//! - Otherwise the [`Distribution`] policy applies. `Left`, `Center` and
//!   `Right` keep natural widths and only move the track with a leading
//!   inset. `Average` stretches the narrow segments so that the track fills
//!   the container exactly.
//!
//! Separators, when enabled, reserve `separator_width` between segments and
//! half of it before the first and after the last one.
//!
//! Layout is a pure function of its inputs: running it twice gives the same
//! frames.

use horizon_segments_core::logging::targets;
use horizon_segments_render::{EdgeInsets, Rect, Size, TextMeasure};

use crate::widget::segment::{SegmentContent, SegmentModel};
use crate::widget::style::Distribution;

/// Inputs for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub separator_enabled: bool,
    pub separator_width: f32,
    pub separator_insets: EdgeInsets,
    pub segment_min_width: f32,
    pub segment_insets: EdgeInsets,
    pub distribution: Distribution,
    /// Size of the visible area the track is laid out in.
    pub container: Size,
    pub bold: bool,
    pub point_size: f32,
}

impl LayoutConfig {
    /// Space reserved for each separator, zero when separators are off.
    #[inline]
    pub fn separator_space(&self) -> f32 {
        if self.separator_enabled {
            self.separator_width
        } else {
            0.0
        }
    }
}

/// Which rule positioned the segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRegime {
    /// The track overflows (or exactly fills) the container and scrolls.
    Scroll,
    /// The track fits and was placed by this policy.
    Distributed(Distribution),
}

/// The outcome of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    /// Width of all segments plus separator space.
    pub track_width: f32,
    /// Size of the scrollable content.
    pub content_size: Size,
    /// Leading offset of the content inside the container.
    pub leading_inset: f32,
    pub regime: LayoutRegime,
}

impl LayoutResult {
    /// The result of laying out nothing.
    pub const EMPTY: Self = Self {
        track_width: 0.0,
        content_size: Size::ZERO,
        leading_inset: 0.0,
        regime: LayoutRegime::Scroll,
    };

    /// Whether the content is wider than the container.
    #[inline]
    pub fn overflows(&self, container_width: f32) -> bool {
        self.content_size.width > container_width
    }

    /// The content inset to hand to the viewport.
    #[inline]
    pub fn content_inset(&self) -> EdgeInsets {
        EdgeInsets::leading(self.leading_inset)
    }
}

/// Computes segment geometry.
pub struct LayoutEngine<'a> {
    measure: &'a dyn TextMeasure,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine that measures text with `measure`.
    pub fn new(measure: &'a dyn TextMeasure) -> Self {
        Self { measure }
    }

    /// Measure a segment's content, rounded up to whole pixels.
    pub fn content_size(&self, content: &SegmentContent, config: &LayoutConfig) -> Size {
        let size = match content {
            SegmentContent::Text(text) => self.measure.measure(text, config.bold, config.point_size),
            SegmentContent::StyledText(styled) => self.measure.measure(
                styled.text(),
                styled.bold_or(config.bold),
                styled.point_size_or(config.point_size),
            ),
            SegmentContent::Icon(icon) => icon.size(),
        };
        size.ceil()
    }

    /// Lay out `segments` in place.
    #[tracing::instrument(
        skip_all,
        target = "horizon_segments::layout",
        level = "debug",
        fields(count = segments.len(), container_width = config.container.width)
    )]
    pub fn layout(&self, segments: &mut [SegmentModel], config: &LayoutConfig) -> LayoutResult {
        let separator = config.separator_space();
        let container = config.container;

        for segment in segments.iter_mut() {
            let content_size = self.content_size(segment.content(), config);
            let natural = (content_size.width + config.segment_insets.horizontal())
                .max(config.segment_min_width);
            segment.set_measured(content_size, natural);
        }
        assign_frames(segments, separator, container.height);

        let track_width = track_width(segments, separator);
        let natural = |regime, leading_inset| LayoutResult {
            track_width,
            content_size: Size::new(track_width, container.height),
            leading_inset,
            regime,
        };

        let result = if track_width >= container.width {
            natural(LayoutRegime::Scroll, 0.0)
        } else {
            let free = container.width - track_width;
            match config.distribution {
                Distribution::Left => natural(LayoutRegime::Distributed(Distribution::Left), 0.0),
                Distribution::Right => natural(LayoutRegime::Distributed(Distribution::Right), free),
                Distribution::Center => {
                    natural(LayoutRegime::Distributed(Distribution::Center), free / 2.0)
                }
                Distribution::Average => {
                    if distribute_average(segments, separator, container) {
                        LayoutResult {
                            track_width: container.width,
                            content_size: container,
                            leading_inset: 0.0,
                            regime: LayoutRegime::Distributed(Distribution::Average),
                        }
                    } else {
                        natural(LayoutRegime::Distributed(Distribution::Average), 0.0)
                    }
                }
            }
        };

        tracing::debug!(
            target: targets::LAYOUT,
            regime = ?result.regime,
            track_width = result.track_width,
            leading_inset = result.leading_inset,
            "layout complete"
        );
        result
    }
}

/// Sum of segment widths plus one separator space per segment.
fn track_width(segments: &[SegmentModel], separator: f32) -> f32 {
    segments
        .iter()
        .map(|segment| segment.width() + separator)
        .sum()
}

/// Place segments left to right, starting half a separator in.
fn assign_frames(segments: &mut [SegmentModel], separator: f32, height: f32) {
    let mut x = separator / 2.0;
    for segment in segments.iter_mut() {
        segment.set_frame(Rect::new(x, 0.0, segment.width(), height));
        x += segment.width() + separator;
    }
}

/// Stretch narrow segments so the track fills the container.
///
/// Returns `false` and leaves the natural layout in place when there is
/// nothing to stretch.
fn distribute_average(segments: &mut [SegmentModel], separator: f32, container: Size) -> bool {
    if segments.is_empty() {
        return false;
    }

    let separators = separator * segments.len() as f32;
    let average = (container.width - separators) / segments.len() as f32;

    let (large_sum, small_count) =
        segments
            .iter()
            .fold((0.0f32, 0usize), |(large_sum, small_count), segment| {
                if segment.width() >= average {
                    (large_sum + segment.width(), small_count)
                } else {
                    (large_sum, small_count + 1)
                }
            });

    if small_count == 0 {
        tracing::debug!(
            target: targets::LAYOUT,
            average,
            "no segment narrower than average; keeping natural widths"
        );
        return false;
    }

    let stretched = (container.width - separators - large_sum) / small_count as f32;
    for segment in segments.iter_mut() {
        if segment.width() < average {
            segment.set_width(stretched);
        }
    }
    assign_frames(segments, separator, container.height);

    tracing::trace!(
        target: targets::LAYOUT,
        average,
        stretched,
        small_count,
        "distributed average widths"
    );
    true
}
