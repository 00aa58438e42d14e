//! Appearance and behaviour options for the segmented control.
//!
//! Every option is grouped into a small section struct and collected in
//! [`SegmentControlStyle`]. Styles can be loaded from and saved to TOML:
//!
//! ```toml
//! indicator = "strip"
//! distribution = "center"
//!
//! [separator]
//! enabled = true
//! color = "#333333"
//!
//! [animation]
//! duration = 0.25
//!
//! [strip]
//! location = "up"
//! colors = ["#FF0000", "#0000FF"]
//! ```
//!
//! Missing sections and fields keep their defaults. Colours are hex strings
//! (`#RRGGBB` or `#RRGGBBAA`) and durations are seconds.

use std::path::Path;
use std::time::Duration;

use horizon_segments_core::logging::targets;
use horizon_segments_render::{Color, EdgeInsets, Size};
use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::widget::indicator::IndicatorConfig;
use crate::widget::layout::LayoutConfig;

/// Which indicator marks the selected segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStyle {
    /// A translucent block over the segment.
    #[default]
    Cover,
    /// A thin bar above or below the segment.
    Strip,
}

/// How segments share space when they don't fill the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Stretch narrow segments so the track fills the container.
    #[default]
    Average,
    /// Natural widths, centred.
    Center,
    /// Natural widths, flush left.
    Left,
    /// Natural widths, flush right.
    Right,
}

/// Horizontal extent of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorRange {
    /// Only the segment's content, centred.
    #[default]
    Content,
    /// The whole segment.
    Segment,
}

/// Edge the strip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripLocation {
    Up,
    #[default]
    Down,
}

/// Separators drawn between segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorStyle {
    pub enabled: bool,
    pub color: Color,
    /// Horizontal space reserved for each separator.
    pub width: f32,
    /// Insets of the visible separator line within its reserved space.
    pub insets: EdgeInsets,
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::BLACK,
            width: 9.0,
            insets: EdgeInsets::new(8.0, 4.0, 8.0, 4.0),
        }
    }
}

/// The baseline the strip slides along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidewayStyle {
    pub enabled: bool,
    pub height: f32,
    pub color: Color,
}

impl Default for SlidewayStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            height: 1.0,
            color: Color::LIGHT_GRAY,
        }
    }
}

/// Selection change animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationStyle {
    pub enabled: bool,
    #[serde(with = "duration_secs")]
    pub duration: Duration,
}

impl Default for AnimationStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Duration::from_millis(150),
        }
    }
}

/// Segment sizing and text appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentStyle {
    pub min_width: f32,
    /// Space around the content. Only left and right affect layout.
    pub insets: EdgeInsets,
    pub bold: bool,
    pub font_size: f32,
    pub foreground: Color,
    pub foreground_selected: Color,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            min_width: 50.0,
            insets: EdgeInsets::new(0.0, 10.0, 0.0, 10.0),
            bold: true,
            font_size: 12.0,
            foreground: Color::GRAY,
            foreground_selected: Color::BLACK,
        }
    }
}

/// The cover indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverStyle {
    pub range: IndicatorRange,
    pub opacity: f32,
    pub color: Color,
}

impl Default for CoverStyle {
    fn default() -> Self {
        Self {
            range: IndicatorRange::Segment,
            opacity: 0.2,
            color: Color::BLACK,
        }
    }
}

/// The strip indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripStyle {
    pub range: IndicatorRange,
    pub location: StripLocation,
    pub color: Color,
    /// When non-empty, the strip takes `colors[index % len]` instead of
    /// `color`.
    pub colors: Vec<Color>,
    pub height: f32,
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            range: IndicatorRange::Content,
            location: StripLocation::Down,
            color: Color::ORANGE,
            colors: Vec::new(),
            height: 3.0,
        }
    }
}

impl StripStyle {
    /// The strip colour while `index` is selected.
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            self.color
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

/// All appearance and behaviour options of a segmented control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentControlStyle {
    pub indicator: IndicatorStyle,
    pub distribution: Distribution,
    pub separator: SeparatorStyle,
    pub slideway: SlidewayStyle,
    pub animation: AnimationStyle,
    pub segment: SegmentStyle,
    pub cover: CoverStyle,
    pub strip: StripStyle,
}

impl SegmentControlStyle {
    /// Parse a style from TOML text.
    pub fn from_toml_str(text: &str) -> StyleResult<Self> {
        let style: Self = toml::from_str(text)?;
        style.validate()?;
        tracing::debug!(
            target: targets::STYLE,
            indicator = ?style.indicator,
            distribution = ?style.distribution,
            "parsed style"
        );
        Ok(style)
    }

    /// Read a style from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::STYLE, path = %path.display(), "loading style");
        Self::from_toml_str(&text)
    }

    /// Format the style as TOML.
    pub fn to_toml_string(&self) -> StyleResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the style to a TOML file, replacing any existing file.
    pub fn save_toml_file(&self, path: impl AsRef<Path>) -> StyleResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::STYLE, path = %path.display(), "saved style");
        Ok(())
    }

    /// Check that every numeric option is in range.
    pub fn validate(&self) -> StyleResult<()> {
        non_negative("separator.width", self.separator.width)?;
        non_negative("slideway.height", self.slideway.height)?;
        non_negative("segment.min_width", self.segment.min_width)?;
        non_negative("strip.height", self.strip.height)?;

        if !(self.segment.font_size.is_finite() && self.segment.font_size > 0.0) {
            return Err(StyleError::Invalid {
                field: "segment.font_size",
                reason: format!("must be positive, got {}", self.segment.font_size),
            });
        }
        if !(0.0..=1.0).contains(&self.cover.opacity) {
            return Err(StyleError::Invalid {
                field: "cover.opacity",
                reason: format!("must be between 0 and 1, got {}", self.cover.opacity),
            });
        }
        Ok(())
    }

    /// The layout inputs for a container of the given size.
    pub fn layout_config(&self, container: Size) -> LayoutConfig {
        LayoutConfig {
            separator_enabled: self.separator.enabled,
            separator_width: self.separator.width,
            separator_insets: self.separator.insets,
            segment_min_width: self.segment.min_width,
            segment_insets: self.segment.insets,
            distribution: self.distribution,
            container,
            bold: self.segment.bold,
            point_size: self.segment.font_size,
        }
    }

    /// The indicator inputs.
    pub fn indicator_config(&self) -> IndicatorConfig {
        IndicatorConfig {
            style: self.indicator,
            cover: self.cover.clone(),
            strip: self.strip.clone(),
            slideway: self.slideway.clone(),
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> StyleResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::Invalid {
            field,
            reason: format!("must be a non-negative number, got {value}"),
        })
    }
}

/// Durations as fractional seconds.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            de::Error::custom(format!("duration must be a non-negative number of seconds, got {secs}"))
        })
    }
}
