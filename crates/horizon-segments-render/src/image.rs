//! Icon images shown inside segments.
//!
//! An [`Icon`] is a decoded RGBA bitmap plus the logical size it occupies in
//! layout. Icons can also be size-only placeholders, which is what layout
//! and hit-testing need when no pixels are available (for example in tests).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// An image displayed as a segment's content.
///
/// Cloning is cheap: pixel data is shared.
#[derive(Clone)]
pub struct Icon {
    size: Size,
    pixels: Option<Arc<RgbaImage>>,
}

impl Icon {
    /// Create a size-only icon with no pixel data.
    pub fn with_size(size: Size) -> Self {
        Self { size, pixels: None }
    }

    /// Create an icon from a decoded image.
    ///
    /// The logical size is the image's pixel size.
    pub fn from_image(image: DynamicImage) -> RenderResult<Self> {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            size: Size::from((width, height)),
            pixels: Some(Arc::new(rgba)),
        })
    }

    /// Decode an icon from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        Self::from_image(image::load_from_memory(bytes)?)
    }

    /// Load and decode an icon from a file.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// The logical size of the icon.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The decoded pixels, if this icon has any.
    #[inline]
    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.as_deref()
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("size", &self.size)
            .field("has_pixels", &self.pixels.is_some())
            .finish()
    }
}

impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && match (&self.pixels, &other.pixels) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.as_raw() == b.as_raw(),
                (None, None) => true,
                _ => false,
            }
    }
}
