//! Indicator, slideway and separator geometry.
//!
//! All functions are pure and take segment frames as computed by the last
//! layout pass. Indices are the control's raw `i32` selection; anything
//! outside `0..segments.len()` yields an empty rectangle.

use horizon_segments_render::{Color, EdgeInsets, LayerRole, Primitive, Rect, Size};

use crate::widget::segment::SegmentModel;
use crate::widget::style::{
    CoverStyle, IndicatorRange, IndicatorStyle, SlidewayStyle, StripLocation, StripStyle,
};

/// Inputs for indicator geometry and appearance.
///
/// Built from a style with
/// [`SegmentControlStyle::indicator_config`](crate::widget::SegmentControlStyle::indicator_config).
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    pub style: IndicatorStyle,
    pub cover: CoverStyle,
    pub strip: StripStyle,
    pub slideway: SlidewayStyle,
}

impl IndicatorConfig {
    /// The layer the configured indicator is drawn in.
    pub fn role(&self) -> LayerRole {
        match self.style {
            IndicatorStyle::Cover => LayerRole::Cover,
            IndicatorStyle::Strip => LayerRole::Strip,
        }
    }

    /// The indicator rectangle for `index` in the configured style.
    pub fn indicator_rect(&self, segments: &[SegmentModel], index: i32, container_height: f32) -> Rect {
        match self.style {
            IndicatorStyle::Cover => cover_rect(segments, index, self.cover.range, container_height),
            IndicatorStyle::Strip => strip_rect(segments, index, &self.strip),
        }
    }

    /// The indicator fill while the segment at `index` is selected.
    pub fn indicator_fill(&self, index: usize) -> Primitive {
        match self.style {
            IndicatorStyle::Cover => Primitive::Fill {
                color: self.cover.color,
                opacity: self.cover.opacity,
            },
            IndicatorStyle::Strip => Primitive::Fill {
                color: self.strip.color_for(index),
                opacity: 1.0,
            },
        }
    }

    /// The strip colour for `index`, when a colour cycle is in effect.
    pub fn cycle_color(&self, index: usize) -> Option<Color> {
        (self.style == IndicatorStyle::Strip && !self.strip.colors.is_empty())
            .then(|| self.strip.color_for(index))
    }

    /// The slideway rectangle, if a slideway is drawn at all.
    ///
    /// Only the strip indicator has a slideway.
    pub fn slideway_rect(&self, content_width: f32, container: Size) -> Option<Rect> {
        (self.style == IndicatorStyle::Strip && self.slideway.enabled).then(|| {
            slideway_rect(&self.strip, self.slideway.height, content_width, container)
        })
    }

    /// The slideway fill.
    pub fn slideway_fill(&self) -> Primitive {
        Primitive::Fill {
            color: self.slideway.color,
            opacity: 1.0,
        }
    }
}

/// Resolve a raw index against the segment list.
#[inline]
pub(crate) fn resolve(segments: &[SegmentModel], index: i32) -> Option<&SegmentModel> {
    usize::try_from(index).ok().and_then(|i| segments.get(i))
}

/// Horizontal extent `(x, width)` of an indicator over `segment`.
fn span(segment: &SegmentModel, range: IndicatorRange) -> (f32, f32) {
    let frame = segment.frame();
    match range {
        IndicatorRange::Segment => (frame.left(), segment.width()),
        IndicatorRange::Content => {
            let width = segment.content_size().width;
            (frame.left() + (segment.width() - width) / 2.0, width)
        }
    }
}

/// The cover rectangle for `index`, spanning the full container height.
pub fn cover_rect(
    segments: &[SegmentModel],
    index: i32,
    range: IndicatorRange,
    container_height: f32,
) -> Rect {
    match resolve(segments, index) {
        Some(segment) => {
            let (x, width) = span(segment, range);
            Rect::new(x, 0.0, width, container_height)
        }
        None => Rect::ZERO,
    }
}

/// The strip rectangle for `index`.
pub fn strip_rect(segments: &[SegmentModel], index: i32, strip: &StripStyle) -> Rect {
    match resolve(segments, index) {
        Some(segment) => {
            let (x, width) = span(segment, strip.range);
            let y = match strip.location {
                StripLocation::Down => segment.frame().height() - strip.height,
                StripLocation::Up => 0.0,
            };
            Rect::new(x, y, width, strip.height)
        }
        None => Rect::ZERO,
    }
}

/// The slideway rectangle.
///
/// It extends one container width beyond each end of the content so that it
/// stays visible when the content bounces, and is centred on the strip's
/// vertical midpoint.
pub fn slideway_rect(
    strip: &StripStyle,
    slideway_height: f32,
    content_width: f32,
    container: Size,
) -> Rect {
    let mid_y = match strip.location {
        StripLocation::Down => container.height - strip.height / 2.0,
        StripLocation::Up => strip.height / 2.0,
    };
    Rect::new(
        -container.width,
        mid_y - slideway_height / 2.0,
        content_width + container.width * 2.0,
        slideway_height,
    )
}

/// One visible separator rectangle per gap between consecutive segments.
pub fn separator_mask(
    segments: &[SegmentModel],
    separator_width: f32,
    insets: EdgeInsets,
    container_height: f32,
) -> Vec<Rect> {
    segments
        .windows(2)
        .map(|pair| {
            Rect::new(
                pair[0].frame().right() + insets.left,
                insets.top,
                separator_width - insets.horizontal(),
                container_height - insets.vertical(),
            )
        })
        .collect()
}

/// The container-sized rectangle that centres `frame` when scrolled into
/// view.
pub fn scroll_target(frame: Rect, container: Size) -> Rect {
    Rect::new(
        frame.left() - (container.width - frame.width()) / 2.0,
        0.0,
        container.width,
        container.height,
    )
}

/// An indicator reset to zero width in place.
#[inline]
pub fn collapse(rect: Rect) -> Rect {
    rect.with_width(0.0)
}
