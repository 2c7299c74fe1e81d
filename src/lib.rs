//! circlemask cuts a circle out of a raster image.
//!
//! Given an image, a center and a radius, the output is the input inside the circle and fully
//! transparent outside it, cropped to the circle's bounding square.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes -> [`image::DynamicImage`] in whatever color type the file uses.
//! 2. **Normalize**: `DynamicImage -> NormalizedImage`, an owned straight-alpha RGBA8 copy
//!    re-based to (0,0).
//! 3. **Mask**: [`CircularView`] wraps the normalized image by reference. Visibility is
//!    computed per query; no second buffer is allocated.
//! 4. **Encode**: the view is rasterized over its bounds and written as PNG to
//!    `<input>.masked`.
//!
//! Both [`NormalizedImage`] and [`CircularView`] implement [`ImageSource`], so the encoder does
//! not care which one it is given.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod mask;
mod raster;

/// Argument parsing and the end-to-end masking run.
pub mod app;

pub use app::{MaskArgs, USAGE_ARGS, run};
pub use encode::png::{MASKED_SUFFIX, encode_png, encode_png_to, masked_output_path, write_png};
pub use foundation::core::{ColorModel, Pixel, Point, Rect, TRANSPARENT};
pub use foundation::error::{MaskError, MaskResult};
pub use mask::circular::CircularView;
pub use raster::decode::{decode_image, load_image};
pub use raster::normalize::{NormalizedImage, normalize, normalize_view};
pub use raster::source::ImageSource;
