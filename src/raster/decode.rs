use std::path::Path;

use crate::{
    ColorModel,
    foundation::error::{MaskError, MaskResult},
};

/// Decode encoded image bytes, guessing the container format from its magic bytes.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> MaskResult<image::DynamicImage> {
    let img = image::load_from_memory(bytes).map_err(|e| MaskError::decode(e.to_string()))?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        color_model = ?ColorModel::from(img.color()),
        "decoded image"
    );
    Ok(img)
}

/// Read and decode the image file at `path`.
pub fn load_image(path: impl AsRef<Path>) -> MaskResult<image::DynamicImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| MaskError::io(path, e))?;
    decode_image(&bytes).map_err(|e| match e {
        MaskError::Decode(msg) => MaskError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
