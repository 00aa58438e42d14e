//! Building the layer scene for a layout pass.

use horizon_segments_render::{Color, Layer, LayerRole, Primitive, Rect, Scene, Size};

use crate::widget::indicator::{self, resolve};
use crate::widget::layout::LayoutResult;
use crate::widget::segment::{SegmentContent, SegmentModel};
use crate::widget::style::SegmentControlStyle;

/// Text colour of `content` in the given selection state.
///
/// Icons have no text colour.
pub(crate) fn foreground_color(
    content: &SegmentContent,
    style: &SegmentControlStyle,
    selected: bool,
) -> Option<Color> {
    match content {
        SegmentContent::Text(_) if selected => Some(style.segment.foreground_selected),
        SegmentContent::Text(_) => Some(style.segment.foreground),
        SegmentContent::StyledText(styled) if selected => Some(styled.selected_color()),
        SegmentContent::StyledText(styled) => Some(styled.color()),
        SegmentContent::Icon(_) => None,
    }
}

/// Build every layer for the current geometry and selection.
///
/// Content layers come first, then the indicator, then separators on top.
pub fn build_scene(
    segments: &[SegmentModel],
    layout: &LayoutResult,
    style: &SegmentControlStyle,
    selected: i32,
    container: Size,
) -> Scene {
    let mut scene = Scene::new(layout.content_size);

    for (index, segment) in segments.iter().enumerate() {
        let is_selected = usize::try_from(selected).is_ok_and(|s| s == index);
        let frame = segment.content_frame(container.height);
        let color = foreground_color(segment.content(), style, is_selected)
            .unwrap_or(style.segment.foreground);
        let primitive = match segment.content() {
            SegmentContent::Text(text) => Primitive::Text {
                text: text.clone(),
                color,
                bold: style.segment.bold,
                point_size: style.segment.font_size,
            },
            SegmentContent::StyledText(styled) => Primitive::Text {
                text: styled.text().to_owned(),
                color,
                bold: styled.bold_or(style.segment.bold),
                point_size: styled.point_size_or(style.segment.font_size),
            },
            SegmentContent::Icon(icon) => Primitive::Image(icon.clone()),
        };
        scene.push(Layer::new(LayerRole::Content(index), frame, primitive));
    }

    let config = style.indicator_config();
    if let Some(frame) = config.slideway_rect(layout.content_size.width, container) {
        scene.push(Layer::new(LayerRole::Slideway, frame, config.slideway_fill()));
    }
    let color_index = resolve(segments, selected).map_or(0, |_| selected as usize);
    scene.push(Layer::new(
        config.role(),
        config.indicator_rect(segments, selected, container.height),
        config.indicator_fill(color_index),
    ));

    if style.separator.enabled {
        scene.push(Layer::new(
            LayerRole::Separator,
            Rect::from_size(layout.content_size),
            Primitive::MaskedFill {
                color: style.separator.color,
                mask: indicator::separator_mask(
                    segments,
                    style.separator.width,
                    style.separator.insets,
                    container.height,
                ),
            },
        ));
    }

    scene
}
