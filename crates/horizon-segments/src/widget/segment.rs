//! Segment contents and per-segment layout state.

use horizon_segments_render::{Color, Icon, Rect, Size};

/// Text with its own colours and, optionally, its own font attributes.
///
/// Unlike plain [`SegmentContent::Text`], styled text ignores the control's
/// foreground colours and uses the pair it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    text: String,
    color: Color,
    selected_color: Color,
    bold: Option<bool>,
    point_size: Option<f32>,
}

impl StyledText {
    /// Create styled text using the control's font attributes.
    pub fn new(text: impl Into<String>, color: Color, selected_color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            selected_color,
            bold: None,
            point_size: None,
        }
    }

    /// Override the control's bold setting for this text.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Override the control's point size for this text.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Colour when the segment is not selected.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Colour when the segment is selected.
    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Own bold setting, or `default` if none was given.
    pub fn bold_or(&self, default: bool) -> bool {
        self.bold.unwrap_or(default)
    }

    /// Own point size, or `default` if none was given.
    pub fn point_size_or(&self, default: f32) -> f32 {
        self.point_size.unwrap_or(default)
    }
}

/// What a segment displays.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Text drawn with the control's font and colours.
    Text(String),
    /// An image at its natural size.
    Icon(Icon),
    /// Text with its own colours and optional font attributes.
    StyledText(StyledText),
}

impl SegmentContent {
    /// Convenience constructor for plain text.
    pub fn text(text: impl Into<String>) -> Self {
        SegmentContent::Text(text.into())
    }

    /// The displayed string, if this content is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SegmentContent::Text(text) => Some(text),
            SegmentContent::StyledText(styled) => Some(styled.text()),
            SegmentContent::Icon(_) => None,
        }
    }
}

impl From<&str> for SegmentContent {
    fn from(text: &str) -> Self {
        SegmentContent::Text(text.to_owned())
    }
}

impl From<String> for SegmentContent {
    fn from(text: String) -> Self {
        SegmentContent::Text(text)
    }
}

impl From<Icon> for SegmentContent {
    fn from(icon: Icon) -> Self {
        SegmentContent::Icon(icon)
    }
}

impl From<StyledText> for SegmentContent {
    fn from(styled: StyledText) -> Self {
        SegmentContent::StyledText(styled)
    }
}

/// One segment as laid out by the control.
///
/// The content never changes; the measured fields are recomputed on every
/// layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentModel {
    content: SegmentContent,
    content_size: Size,
    width: f32,
    frame: Rect,
}

impl SegmentModel {
    /// Create an unmeasured segment.
    pub fn new(content: SegmentContent) -> Self {
        Self {
            content,
            content_size: Size::ZERO,
            width: 0.0,
            frame: Rect::ZERO,
        }
    }

    #[inline]
    pub fn content(&self) -> &SegmentContent {
        &self.content
    }

    /// Measured content size, in whole pixels.
    #[inline]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Allocated width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Frame in content coordinates.
    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The content rectangle centred inside the segment frame.
    ///
    /// `height` is the height of the container the content is centred in.
    pub fn content_frame(&self, height: f32) -> Rect {
        Rect::new(
            self.frame.left() + (self.frame.width() - self.content_size.width) / 2.0,
            (height - self.content_size.height) / 2.0,
            self.content_size.width,
            self.content_size.height,
        )
    }

    pub(crate) fn set_measured(&mut self, content_size: Size, width: f32) {
        self.content_size = content_size;
        self.width = width;
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

impl From<SegmentContent> for SegmentModel {
    fn from(content: SegmentContent) -> Self {
        SegmentModel::new(content)
    }
}
