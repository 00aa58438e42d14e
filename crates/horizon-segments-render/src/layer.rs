//! Retained layer primitives.
//!
//! A segmented control draws itself as a flat list of [`Layer`]s: one per
//! segment's content, plus the separator band, the slideway, and the
//! selection indicator. A layout pass produces a fresh [`Scene`]; between
//! passes individual layers are mutated in place (frame and colours) so the
//! host can animate them.
//!
//! # Example
//!
//! ```
//! use horizon_segments_render::{Color, Rect, Size};
//! use horizon_segments_render::layer::{Layer, LayerRole, Primitive, Scene};
//!
//! let mut scene = Scene::new(Size::new(200.0, 40.0));
//! scene.push(Layer::new(
//!     LayerRole::Cover,
//!     Rect::new(0.0, 0.0, 60.0, 40.0),
//!     Primitive::Fill { color: Color::BLACK, opacity: 0.2 },
//! ));
//!
//! assert!(scene.layer(LayerRole::Cover).is_some());
//! ```

use crate::image::Icon;
use crate::types::{Color, Rect, Size};

/// What a layer represents in the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// The content (text or icon) of the segment at this index.
    Content(usize),
    /// The band of separators between segments.
    Separator,
    /// The full-width baseline under or over the strip.
    Slideway,
    /// The translucent cover indicator.
    Cover,
    /// The bar indicator.
    Strip,
}

/// What a layer draws inside its frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A solid rectangle.
    Fill { color: Color, opacity: f32 },
    /// A solid rectangle visible only inside the mask rectangles.
    ///
    /// Mask rectangles are in the layer's coordinate space.
    MaskedFill { color: Color, mask: Vec<Rect> },
    /// A single line of text, centred in the frame.
    Text {
        text: String,
        color: Color,
        bold: bool,
        point_size: f32,
    },
    /// An image drawn to fill the frame.
    Image(Icon),
}

/// A positioned primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    role: LayerRole,
    frame: Rect,
    primitive: Primitive,
}

impl Layer {
    /// Create a new layer.
    pub fn new(role: LayerRole, frame: Rect, primitive: Primitive) -> Self {
        Self {
            role,
            frame,
            primitive,
        }
    }

    /// The layer's role.
    #[inline]
    pub fn role(&self) -> LayerRole {
        self.role
    }

    /// The layer's frame in content coordinates.
    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// What the layer draws.
    #[inline]
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Move or resize the layer.
    #[inline]
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Change the fill colour.
    ///
    /// Returns `false` if the layer has no fill.
    pub fn set_background(&mut self, new_color: Color) -> bool {
        match &mut self.primitive {
            Primitive::Fill { color, .. } | Primitive::MaskedFill { color, .. } => {
                *color = new_color;
                true
            }
            Primitive::Text { .. } | Primitive::Image(_) => false,
        }
    }

    /// Change the text colour.
    ///
    /// Returns `false` if the layer is not text.
    pub fn set_foreground(&mut self, new_color: Color) -> bool {
        match &mut self.primitive {
            Primitive::Text { color, .. } => {
                *color = new_color;
                true
            }
            _ => false,
        }
    }
}

/// Everything drawn for one layout pass, in back-to-front order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    content_size: Size,
    layers: Vec<Layer>,
}

impl Scene {
    /// Create an empty scene covering `content_size`.
    pub fn new(content_size: Size) -> Self {
        Self {
            content_size,
            layers: Vec::new(),
        }
    }

    /// The size of the scrollable content the scene covers.
    #[inline]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Append a layer on top of the existing ones.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// All layers, back to front.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Find the layer with the given role.
    pub fn layer(&self, role: LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.role == role)
    }

    /// Find the layer with the given role, mutably.
    pub fn layer_mut(&mut self, role: LayerRole) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.role == role)
    }

    /// Number of layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the scene has no layers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
