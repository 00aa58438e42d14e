//! Prelude module for Horizon Segments.
//!
//! ```
//! use horizon_segments::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use horizon_segments_core::{ConnectionId, Property, Signal};

// ============================================================================
// Control
// ============================================================================

pub use crate::widget::{
    SegmentAccess, SegmentContent, SegmentControl, SegmentControlDelegate, StyledText,
};
pub use crate::widget::{LayerSurface, RecordingSurface, ScrollState, ScrollViewport};

// ============================================================================
// Style
// ============================================================================

pub use crate::widget::{
    Distribution, IndicatorRange, IndicatorStyle, SegmentControlStyle, StripLocation,
};
pub use crate::{StyleError, StyleResult};

// ============================================================================
// Rendering
// ============================================================================

pub use horizon_segments_render::{
    ApproximateTextMeasure, Color, CosmicTextMeasure, EdgeInsets, Icon, LayerRole, Point,
    Primitive, Rect, Scene, Size, TextMeasure,
};
