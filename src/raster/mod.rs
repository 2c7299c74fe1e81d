//! Decoding and normalization of source rasters, and the [`source::ImageSource`] seam the
//! mask and encoder are written against.

pub(crate) mod decode;
pub(crate) mod normalize;
pub(crate) mod source;
