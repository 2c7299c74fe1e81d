/// A straight-alpha RGBA8 pixel (color channels are not multiplied by alpha).
pub type Pixel = image::Rgba<u8>;

/// Fully transparent pixel. Color channels are irrelevant once alpha is 0.
pub const TRANSPARENT: Pixel = image::Rgba([0, 0, 0, 0]);

/// Integer coordinate in image space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Construct a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned half-open rectangle `[min.x, max.x) x [min.y, max.y)`.
///
/// Inverted rectangles (`max < min` on either axis) are allowed and behave as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub min: Point,
    /// Exclusive bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Construct a rectangle from its corners.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(Point::new(0, 0), Point::new(w, h))
    }

    /// Number of columns, 0 for inverted rectangles.
    pub fn width(self) -> u32 {
        span(self.min.x, self.max.x)
    }

    /// Number of rows, 0 for inverted rectangles.
    pub fn height(self) -> u32 {
        span(self.min.y, self.max.y)
    }

    /// True when the rectangle covers no pixel.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether `p` lies inside; the max edges are excluded.
    pub fn contains(self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Overlap of two rectangles. The result is empty when they do not touch.
    pub fn intersect(self, other: Rect) -> Rect {
        Rect::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        )
    }
}

fn span(lo: i32, hi: i32) -> u32 {
    let d = i64::from(hi) - i64::from(lo);
    u32::try_from(d.max(0)).unwrap_or(u32::MAX)
}

/// Native pixel encoding of an image source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// 8-bit luminance.
    L8,
    /// 8-bit luminance with alpha.
    La8,
    /// 8-bit RGB.
    Rgb8,
    /// 8-bit RGBA with straight alpha; the canonical model masks operate in.
    Rgba8,
    /// 16-bit luminance.
    L16,
    /// 16-bit luminance with alpha.
    La16,
    /// 16-bit RGB.
    Rgb16,
    /// 16-bit RGBA.
    Rgba16,
    /// 32-bit float RGB.
    Rgb32F,
    /// 32-bit float RGBA.
    Rgba32F,
    /// Any encoding the decoder reports that is not listed above.
    Other,
}

impl ColorModel {
    /// Whether the model carries its own alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::La8 | Self::Rgba8 | Self::La16 | Self::Rgba16 | Self::Rgba32F
        )
    }
}

impl From<image::ColorType> for ColorModel {
    fn from(c: image::ColorType) -> Self {
        use image::ColorType as C;
        match c {
            C::L8 => Self::L8,
            C::La8 => Self::La8,
            C::Rgb8 => Self::Rgb8,
            C::Rgba8 => Self::Rgba8,
            C::L16 => Self::L16,
            C::La16 => Self::La16,
            C::Rgb16 => Self::Rgb16,
            C::Rgba16 => Self::Rgba16,
            C::Rgb32F => Self::Rgb32F,
            C::Rgba32F => Self::Rgba32F,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
