//! Horizon Segments - a horizontally scrolling segmented control.
//!
//! A [`SegmentControl`] shows a row of text, icon or styled-text segments.
//! When the segments are narrower than the control, the spare width is
//! distributed left, right, centred or across the narrow segments. When
//! they are wider, the row scrolls. The selected segment is marked with a
//! translucent cover or a coloured strip that slides between segments.
//!
//! The control does no drawing of its own. It describes its layers as a
//! [`Scene`](horizon_segments_render::Scene) and its changes as
//! [`Transaction`](animation::Transaction)s, handed to a host-provided
//! [`LayerSurface`](widget::LayerSurface).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_segments::prelude::*;
//!
//! let style = SegmentControlStyle::from_toml_str(
//!     r##"
//!     indicator = "strip"
//!     distribution = "center"
//!
//!     [strip]
//!     colors = ["#ff0000", "#00ff00"]
//!     "##,
//! )?;
//!
//! let mut control = SegmentControl::headless(
//!     Size::new(375.0, 44.0),
//!     Arc::new(ApproximateTextMeasure::new()),
//! )
//! .with_style(style);
//! control.set_segments(["Top", "Local", "World"]);
//! control.set_selected_index(1);
//!
//! let strip = control.scene().layer(LayerRole::Strip).map(|layer| layer.frame());
//! assert!(strip.is_some_and(|frame| frame.width() > 0.0));
//! # Ok::<(), horizon_segments::StyleError>(())
//! ```

mod error;

pub mod animation;
pub mod prelude;
pub mod widget;

pub use error::{StyleError, StyleResult};
pub use widget::{SegmentControl, SegmentControlStyle};

pub use horizon_segments_core::{Property, Signal};

/// Scene and measurement types.
pub mod render {
    pub use horizon_segments_render::*;
}
