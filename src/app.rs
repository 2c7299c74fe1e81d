//! Pipeline driver: parsed arguments in, masked PNG on disk out.

use std::path::PathBuf;

use crate::{
    encode::png::{masked_output_path, write_png},
    foundation::core::Point,
    foundation::error::{MaskError, MaskResult},
    mask::circular::CircularView,
    raster::{decode::load_image, normalize::normalize, source::ImageSource},
};

/// Names of the positional arguments, in order.
pub const USAGE_ARGS: [&str; 4] = ["/path/to/image", "x", "y", "radius"];

/// Everything a masking run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskArgs {
    /// Image to mask. The output is written next to it.
    pub image_path: PathBuf,
    /// Circle center in the normalized image's coordinates (origin at the top-left pixel).
    pub center: Point,
    /// Circle radius in pixels. Not validated.
    pub radius: i32,
}

impl MaskArgs {
    /// Build from `image x y radius`. Anything past the fourth value is ignored.
    pub fn from_positionals<S: AsRef<str>>(args: &[S]) -> MaskResult<Self> {
        let [path, x, y, radius, ..] = args else {
            return Err(MaskError::usage(format!(
                "expected {} arguments, got {}",
                USAGE_ARGS.len(),
                args.len()
            )));
        };

        Ok(Self {
            image_path: PathBuf::from(path.as_ref()),
            center: Point::new(parse_int("x", x.as_ref())?, parse_int("y", y.as_ref())?),
            radius: parse_int("radius", radius.as_ref())?,
        })
    }

    /// Where [`run`] writes its output.
    pub fn output_path(&self) -> PathBuf {
        masked_output_path(&self.image_path)
    }
}

fn parse_int(name: &str, raw: &str) -> MaskResult<i32> {
    raw.parse::<i32>()
        .map_err(|e| MaskError::parse(format!("{name} '{raw}': {e}")))
}

/// Load, normalize, mask and save. Returns the path written.
#[tracing::instrument(skip(args), fields(image = %args.image_path.display()))]
pub fn run(args: &MaskArgs) -> MaskResult<PathBuf> {
    let decoded = load_image(&args.image_path)?;
    let normalized = normalize(&decoded);
    drop(decoded);
    tracing::info!(
        width = normalized.width(),
        height = normalized.height(),
        "loaded image"
    );

    let view = CircularView::new(&normalized, args.center, args.radius);
    if view.bounds().intersect(normalized.bounds()).is_empty() {
        tracing::warn!(
            center = ?args.center,
            radius = args.radius,
            "mask does not overlap the image; output will be fully transparent"
        );
    }
    let out = args.output_path();
    write_png(&view, &out)?;
    tracing::info!(out = %out.display(), "saved masked image");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
