//! Text measurement.
//!
//! Segment layout only needs one thing from the text stack: the bounding
//! size of a single line of text at a given weight and point size. That is
//! expressed by the [`TextMeasure`] trait so layout can run headless.
//!
//! Two implementations are provided:
//!
//! - [`CosmicTextMeasure`] shapes text with cosmic-text against the system
//!   fonts and reports real advances.
//! - [`ApproximateTextMeasure`] uses a fixed advance per character, which is
//!   deterministic and font-independent. Useful in tests and on machines
//!   without fonts.
//!
//! All results are rounded up to whole pixels.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, Weight};
use horizon_segments_core::logging::targets;
use parking_lot::Mutex;

use crate::types::Size;

/// Line height as a multiple of the point size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measures single-line text.
pub trait TextMeasure: Send + Sync {
    /// Return the size of `text` laid out on one line, rounded up to whole
    /// pixels.
    fn measure(&self, text: &str, bold: bool, point_size: f32) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, bool, f32) -> Size + Send + Sync,
{
    fn measure(&self, text: &str, bold: bool, point_size: f32) -> Size {
        self(text, bold, point_size).ceil()
    }
}

/// Text measurement backed by cosmic-text shaping.
///
/// Creating one with [`CosmicTextMeasure::new`] loads all system fonts,
/// which can take a noticeable amount of time. Share a single instance.
pub struct CosmicTextMeasure {
    font_system: Mutex<FontSystem>,
}

impl CosmicTextMeasure {
    /// Create a measurer using the system fonts.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Create a measurer from an existing cosmic-text font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        let faces = font_system.db().len();
        if faces == 0 {
            tracing::warn!(
                target: targets::TEXT,
                "font database is empty; all text will measure as zero width"
            );
        } else {
            tracing::debug!(target: targets::TEXT, faces, "text measurer ready");
        }
        Self {
            font_system: Mutex::new(font_system),
        }
    }
}

impl Default for CosmicTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CosmicTextMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTextMeasure").finish_non_exhaustive()
    }
}

impl TextMeasure for CosmicTextMeasure {
    fn measure(&self, text: &str, bold: bool, point_size: f32) -> Size {
        let line_height = point_size * LINE_HEIGHT_FACTOR;
        if text.is_empty() {
            return Size::new(0.0, line_height).ceil();
        }

        let mut guard = self.font_system.lock();
        let font_system = &mut *guard;

        let metrics = Metrics::new(point_size, line_height);
        let mut buffer = Buffer::new(font_system, metrics);
        buffer.set_size(font_system, None, None);

        let weight = if bold { Weight::BOLD } else { Weight::NORMAL };
        buffer.set_text(font_system, text, Attrs::new().weight(weight), Shaping::Advanced);
        buffer.shape_until_scroll(font_system, false);

        let (width, lines) = buffer
            .layout_runs()
            .fold((0.0f32, 0usize), |(width, lines), run| {
                (width.max(run.line_w), lines + 1)
            });

        let size = Size::new(width, line_height * lines.max(1) as f32).ceil();
        tracing::trace!(
            target: targets::TEXT,
            text,
            bold,
            point_size,
            width = size.width,
            height = size.height,
            "measured text"
        );
        size
    }
}

/// Font-independent text measurement.
///
/// Every character advances by `point_size * advance_ratio`, wide
/// characters (CJK, emoji) by twice that, control characters by nothing.
/// Weight is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasure {
    advance_ratio: f32,
}

impl ApproximateTextMeasure {
    /// Create a measurer with the default advance of 0.6 em.
    pub const fn new() -> Self {
        Self { advance_ratio: 0.6 }
    }

    /// Create a measurer with a custom advance, as a fraction of the point
    /// size.
    pub const fn with_advance_ratio(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    fn cells(text: &str) -> u32 {
        text.chars()
            .map(|c| {
                if c.is_control() {
                    0
                } else if is_wide(c) {
                    2
                } else {
                    1
                }
            })
            .sum()
    }
}

impl Default for ApproximateTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn measure(&self, text: &str, _bold: bool, point_size: f32) -> Size {
        let width = Self::cells(text) as f32 * point_size * self.advance_ratio;
        Size::new(width, point_size * LINE_HEIGHT_FACTOR).ceil()
    }
}

fn is_wide(c: char) -> bool {
    let code = c as u32;
    (0x1100..=0x115F).contains(&code)       // Hangul Jamo
        || (0x2E80..=0x9FFF).contains(&code)   // CJK
        || (0xAC00..=0xD7A3).contains(&code)   // Hangul Syllables
        || (0xF900..=0xFAFF).contains(&code)   // CJK Compatibility
        || (0xFF00..=0xFF60).contains(&code)   // Fullwidth Forms
        || (0x1F300..=0x1F9FF).contains(&code) // Emoji
        || (0x20000..=0x2FFFF).contains(&code) // CJK Extension B-F
}
