//! The scrollable area hosting the segment track.

use horizon_segments_render::{EdgeInsets, Point, Rect, Size};

/// A horizontally scrollable viewport.
///
/// The control sets the content size and inset after each layout pass,
/// asks for segments to be scrolled into view, and reads the content
/// offset to convert touch locations into content coordinates.
pub trait ScrollViewport {
    /// Size of the visible area. This is the container the track is laid
    /// out in.
    fn viewport_size(&self) -> Size;

    /// Content coordinate shown at the viewport's top-left corner.
    ///
    /// Negative while a leading inset is visible.
    fn content_offset(&self) -> Point;

    fn set_content_size(&mut self, size: Size);

    fn set_content_inset(&mut self, inset: EdgeInsets);

    /// Scroll the minimum distance that makes `rect` visible.
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);
}

/// A headless [`ScrollViewport`] that tracks offsets and clamps them to the
/// scrollable range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    viewport: Size,
    content_size: Size,
    content_inset: EdgeInsets,
    offset: Point,
    last_request: Option<(Rect, bool)>,
}

impl ScrollState {
    /// Create a viewport of the given size with no content.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            content_size: Size::ZERO,
            content_inset: EdgeInsets::ZERO,
            offset: Point::ZERO,
            last_request: None,
        }
    }

    /// Resize the visible area.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.clamp_offset();
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    /// The most recent scroll request and whether it was animated.
    pub fn last_request(&self) -> Option<(Rect, bool)> {
        self.last_request
    }

    /// Scroll directly to a horizontal offset, clamped.
    pub fn set_offset_x(&mut self, x: f32) {
        self.offset.x = x;
        self.clamp_offset();
    }

    fn min_offset_x(&self) -> f32 {
        -self.content_inset.left
    }

    fn max_offset_x(&self) -> f32 {
        (self.content_size.width + self.content_inset.right - self.viewport.width)
            .max(self.min_offset_x())
    }

    fn clamp_offset(&mut self) {
        self.offset.x = self.offset.x.clamp(self.min_offset_x(), self.max_offset_x());
    }
}

impl ScrollViewport for ScrollState {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.clamp_offset();
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
        self.clamp_offset();
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        self.last_request = Some((rect, animated));

        let view_left = self.offset.x;
        let view_right = self.offset.x + self.viewport.width;
        if rect.left() < view_left {
            self.offset.x = rect.left();
        } else if rect.right() > view_right {
            self.offset.x = rect.right() - self.viewport.width;
        }
        self.clamp_offset();
    }
}
