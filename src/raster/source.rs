use crate::foundation::core::{ColorModel, Pixel, Rect};

/// Read-only, random-access pixel source.
///
/// Implementors answer per-coordinate queries inside (and, where they choose, outside) their
/// declared [`bounds`](ImageSource::bounds). Queries must be pure: asking for the same
/// coordinate twice yields the same pixel, in any order and from any thread.
pub trait ImageSource: Sync {
    /// Native color model of the pixels this source yields.
    fn color_model(&self) -> ColorModel;

    /// Addressable region, half-open.
    fn bounds(&self) -> Rect;

    /// Pixel at `(x, y)` as straight-alpha RGBA8.
    fn at(&self, x: i32, y: i32) -> Pixel;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn at(&self, x: i32, y: i32) -> Pixel {
        (**self).at(x, y)
    }
}
