use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    foundation::error::{ShotError, ShotResult},
    render::surface::RenderSurface,
};

/// File name suggested for saved output.
pub const DEFAULT_FILE_NAME: &str = "screenshot.png";

/// Encode the surface as a straight-alpha RGBA8 PNG at device resolution.
#[tracing::instrument(skip_all, fields(width = surface.width(), height = surface.height()))]
pub fn encode_png(surface: &RenderSurface) -> ShotResult<Vec<u8>> {
    if surface.is_empty() {
        return Err(ShotError::surface("nothing rendered yet"));
    }
    let rgba = surface.to_straight_rgba8();
    let mut out = Vec::new();
    PngEncoder::new(Cursor::new(&mut out))
        .write_image(
            &rgba,
            surface.width(),
            surface.height(),
            ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    tracing::debug!(bytes = out.len(), "encoded png");
    Ok(out)
}

/// Encode and write the surface to `path`.
pub fn write_png(surface: &RenderSurface, path: &Path) -> ShotResult<()> {
    let bytes = encode_png(surface)?;
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
