use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::{
    foundation::core::{ColorModel, Pixel, Rect, TRANSPARENT},
    raster::source::ImageSource,
};

/// Owned straight-alpha RGBA8 copy of a decoded image, origin at (0,0).
///
/// Immutable once built; share it by reference between any number of views.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedImage {
    pixels: RgbaImage,
}

impl NormalizedImage {
    /// Wrap an RGBA8 buffer that is already in the canonical model.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying RGBA8 buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Give up ownership of the underlying RGBA8 buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }
}

impl ImageSource for NormalizedImage {
    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba8
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    /// Out-of-range coordinates read as the zero pixel, which is fully transparent.
    fn at(&self, x: i32, y: i32) -> Pixel {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return TRANSPARENT;
        };
        self.pixels
            .get_pixel_checked(x, y)
            .copied()
            .unwrap_or(TRANSPARENT)
    }
}

/// Convert any decoded image into the canonical straight-alpha RGBA8 model.
///
/// Deeper channels are rescaled to 8 bits and sources without alpha become opaque.
#[tracing::instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn normalize(src: &DynamicImage) -> NormalizedImage {
    tracing::debug!(color_model = ?ColorModel::from(src.color()), "normalizing");
    NormalizedImage::from_rgba(src.to_rgba8())
}

/// Copy an 8-bit view into a fresh canonical buffer.
///
/// The view's own origin is dropped: the result always starts at (0,0), so a
/// sub-image taken at `(ox, oy)` maps its pixel `(ox + i, oy + j)` to `(i, j)`.
pub fn normalize_view<V>(src: &V) -> NormalizedImage
where
    V: GenericImageView,
    V::Pixel: image::Pixel<Subpixel = u8>,
{
    let (width, height) = src.dimensions();
    tracing::debug!(width, height, "normalizing view");
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        image::Pixel::to_rgba(&src.get_pixel(x, y))
    });
    NormalizedImage::from_rgba(pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/normalize.rs"]
mod tests;
