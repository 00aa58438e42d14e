//! The segmented control and the pieces it is built from.
//!
//! - [`SegmentControl`]: owns segments, style and selection, and drives a
//!   [`LayerSurface`] and a [`ScrollViewport`]
//! - [`LayoutEngine`]: measures segments and distributes spare width
//! - [`indicator`]: pure geometry for the cover, strip, slideway and
//!   separators
//! - [`SelectionController`]: turns index changes into [`Transaction`]s
//! - [`HitTester`]: maps content points to segment indices
//!
//! Everything except [`SegmentControl`] is usable on its own, which is how
//! the tests exercise most of it.
//!
//! [`Transaction`]: crate::animation::Transaction

pub mod indicator;
pub mod layout;
pub mod scene;
pub mod segment;
pub mod segment_control;
pub mod selection;
pub mod style;
pub mod surface;
pub mod viewport;

pub use hit_test::HitTester;
pub use indicator::IndicatorConfig;
pub use layout::{LayoutConfig, LayoutEngine, LayoutRegime, LayoutResult};
pub use scene::build_scene;
pub use segment::{SegmentContent, SegmentModel, StyledText};
pub use segment_control::{SegmentAccess, SegmentControl, SegmentControlDelegate};
pub use selection::{
    NO_SELECTION, SelectionContext, SelectionController, SelectionOutcome, SelectionState,
};
pub use style::{
    AnimationStyle, CoverStyle, Distribution, IndicatorRange, IndicatorStyle, SegmentControlStyle,
    SegmentStyle, SeparatorStyle, SlidewayStyle, StripLocation, StripStyle,
};
pub use surface::{LayerSurface, RecordingSurface};
pub use viewport::{ScrollState, ScrollViewport};
