use crate::{
    foundation::core::{ColorModel, Pixel, Point, Rect, TRANSPARENT},
    raster::source::ImageSource,
};

/// Read-only view that shows `source` inside a circle and nothing outside it.
///
/// Nothing is materialized: every [`at`](ImageSource::at) call computes visibility from the
/// fixed center and radius. The edge is hard; points exactly on the circle are hidden.
///
/// The radius is not validated. A radius of zero or less yields empty bounds and a view that
/// is transparent everywhere.
#[derive(Debug)]
pub struct CircularView<'a, S: ?Sized> {
    source: &'a S,
    center: Point,
    radius: i32,
}

impl<S: ?Sized> Clone for CircularView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for CircularView<'_, S> {}

impl<'a, S: ImageSource + ?Sized> CircularView<'a, S> {
    /// Mask `source` to the open disc of `radius` around `center`.
    pub fn new(source: &'a S, center: Point, radius: i32) -> Self {
        Self {
            source,
            center,
            radius,
        }
    }

    /// The wrapped image.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Circle center, in the source's coordinates.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Circle radius as given, possibly zero or negative.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Whether `(x, y)` lies strictly inside the circle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.radius <= 0 {
            return false;
        }
        let dx = (i64::from(x) - i64::from(self.center.x)).unsigned_abs();
        let dy = (i64::from(y) - i64::from(self.center.y)).unsigned_abs();
        let r = u64::from(self.radius.unsigned_abs());
        // Each square fits in u64; a saturated sum is already >= r^2.
        (dx * dx).saturating_add(dy * dy) < r * r
    }
}

impl<S: ImageSource + ?Sized> ImageSource for CircularView<'_, S> {
    fn color_model(&self) -> ColorModel {
        self.source.color_model()
    }

    /// Bounding square of the circle. Not clipped to the source's own bounds.
    fn bounds(&self) -> Rect {
        let Point { x, y } = self.center;
        let r = self.radius;
        Rect::new(
            Point::new(x.saturating_sub(r), y.saturating_sub(r)),
            Point::new(x.saturating_add(r), y.saturating_add(r)),
        )
    }

    fn at(&self, x: i32, y: i32) -> Pixel {
        if self.contains(x, y) {
            self.source.at(x, y)
        } else {
            TRANSPARENT
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/circular.rs"]
mod tests;
