//! Geometry, text measurement and layer types for Horizon Segments.
//!
//! This crate holds everything the segmented control needs to describe what
//! it draws without depending on any particular graphics backend:
//!
//! - [`Point`], [`Size`], [`Rect`], [`EdgeInsets`] and [`Color`]
//! - [`Icon`] images, decoded with the `image` crate
//! - the [`TextMeasure`] trait with a cosmic-text backed implementation
//! - retained [`layer`] primitives grouped into a [`Scene`]
//!
//! # Measuring text
//!
//! ```
//! use horizon_segments_render::{ApproximateTextMeasure, TextMeasure};
//!
//! let measure = ApproximateTextMeasure::with_advance_ratio(0.5);
//! let size = measure.measure("Home", true, 12.0);
//! assert_eq!(size.width, 24.0);
//! ```

mod error;
pub mod image;
pub mod layer;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use image::Icon;
pub use layer::{Layer, LayerRole, Primitive, Scene};
pub use text::{ApproximateTextMeasure, CosmicTextMeasure, TextMeasure};
pub use types::{Color, EdgeInsets, ParseColorError, Point, Rect, Size};
