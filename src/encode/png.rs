use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    foundation::core::Rect,
    foundation::error::{MaskError, MaskResult},
    raster::source::ImageSource,
};

/// Suffix appended to the input path to name the output file.
pub const MASKED_SUFFIX: &str = ".masked";

/// Rows queried per parallel batch. Bounds the encoder's pixel memory to one band.
const BAND_ROWS: usize = 32;

/// `<input>.masked`, next to the input. The suffix is appended, never substituted for the
/// extension.
pub fn masked_output_path(input: impl AsRef<Path>) -> PathBuf {
    let mut s = OsString::from(input.as_ref().as_os_str());
    s.push(MASKED_SUFFIX);
    PathBuf::from(s)
}

fn check_bounds(b: Rect) -> MaskResult<(u32, u32)> {
    if b.is_empty() {
        return Err(MaskError::validation(format!(
            "nothing to encode: bounds {}x{} at ({}, {}) are empty",
            b.width(),
            b.height(),
            b.min.x,
            b.min.y
        )));
    }
    Ok((b.width(), b.height()))
}

/// Stream `src` as a lossless RGBA8 PNG into `out`.
///
/// The first row written is `bounds.min.y` and the first column `bounds.min.x`. Pixels are
/// queried one band of rows at a time (in parallel within the band) and handed straight to the
/// encoder, so the masked image is never held in memory as a whole.
#[tracing::instrument(skip(src, out), fields(bounds = ?src.bounds()))]
pub fn encode_png_to<S, W>(src: &S, out: W) -> MaskResult<()>
where
    S: ImageSource + ?Sized,
    W: Write,
{
    let b = src.bounds();
    let (width, height) = check_bounds(b)?;
    let row_len = (width as usize)
        .checked_mul(4)
        .ok_or_else(|| MaskError::validation(format!("output width {width} is too large")))?;
    tracing::debug!(color_model = ?src.color_model(), width, height, "encoding png");

    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Fast);
    let mut writer = encoder.write_header().context("write png header")?;
    let mut stream = writer.stream_writer().context("start png stream")?;

    let band_len = row_len
        .checked_mul(BAND_ROWS.min(height as usize))
        .ok_or_else(|| MaskError::validation(format!("output width {width} is too large")))?;
    let mut band = Vec::new();
    band.try_reserve_exact(band_len).map_err(|e| {
        MaskError::validation(format!("cannot buffer {band_len} bytes of output rows: {e}"))
    })?;
    band.resize(band_len, 0u8);
    let mut y0 = i64::from(b.min.y);
    let end = i64::from(b.max.y);
    while y0 < end {
        let rows = (end - y0).min(BAND_ROWS as i64) as usize;
        let buf = &mut band[..rows * row_len];
        buf.par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(row, px_row)| {
                let y = (y0 + row as i64) as i32;
                for (col, px) in px_row.chunks_exact_mut(4).enumerate() {
                    let x = (i64::from(b.min.x) + col as i64) as i32;
                    px.copy_from_slice(&src.at(x, y).0);
                }
            });
        stream.write_all(buf).context("write png rows")?;
        y0 += rows as i64;
    }

    stream.finish().context("finish png stream")?;
    Ok(())
}

/// Encode `src` as PNG into an in-memory buffer.
pub fn encode_png<S: ImageSource + ?Sized>(src: &S) -> MaskResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_png_to(src, &mut out)?;
    Ok(out)
}

/// Encode `src` as PNG and write it to `path`.
///
/// Bytes go to a sibling temp file that replaces `path` only once encoding succeeded. On failure
/// the temp file is removed and any existing file at `path` is left as it was.
pub fn write_png<S: ImageSource + ?Sized>(src: &S, path: impl AsRef<Path>) -> MaskResult<()> {
    let path = path.as_ref();
    check_bounds(src.bounds())?;

    let tmp = temp_path(path);
    let result = write_via(src, &tmp).and_then(|()| {
        std::fs::rename(&tmp, path).map_err(|e| MaskError::io(path, e))
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
        return result;
    }
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

fn write_via<S: ImageSource + ?Sized>(src: &S, tmp: &Path) -> MaskResult<()> {
    let file = File::create(tmp).map_err(|e| MaskError::io(tmp, e))?;
    let mut out = BufWriter::new(file);
    encode_png_to(src, &mut out)?;
    out.flush().map_err(|e| MaskError::io(tmp, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(format!(".{}.tmp", std::process::id()));
    PathBuf::from(s)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
