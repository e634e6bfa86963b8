use std::path::Path;

use image::ImageEncoder as _;

use crate::{
    foundation::error::{ArtError, ArtResult},
    render::canvas::Canvas,
};

/// Encode `canvas` as RGBA PNG at `path` and return the written file size in bytes.
///
/// The image is encoded in memory before the destination is touched, so encoder failures
/// never leave a file behind.
#[tracing::instrument(skip(canvas), fields(width = canvas.width(), height = canvas.height()))]
pub fn export_png(canvas: &Canvas, path: &Path) -> ArtResult<u64> {
    let encoded = encode_png(canvas)?;
    std::fs::write(path, &encoded).map_err(|e| ArtError::io(path, e))?;
    let bytes = std::fs::metadata(path)
        .map_err(|e| ArtError::io(path, e))?
        .len();
    tracing::info!(path = %path.display(), bytes, "exported png");
    Ok(bytes)
}

pub fn encode_png(canvas: &Canvas) -> ArtResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out).write_image(
        &canvas.to_straight_rgba8(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
