//! Geometry, pixel and error primitives shared by every other module.

pub(crate) mod core;
pub(crate) mod error;
