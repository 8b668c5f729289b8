use crate::{
    foundation::error::{ShotError, ShotResult},
    render::surface::RenderSurface,
};

/// Put the surface on the system clipboard as an image.
///
/// Builds without the `clipboard` feature always report
/// [`ShotError::ClipboardUnavailable`].
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(surface: &RenderSurface) -> ShotResult<()> {
    if surface.is_empty() {
        return Err(ShotError::surface("nothing rendered yet"));
    }
    let mut clip = arboard::Clipboard::new().map_err(|e| ShotError::clipboard(e.to_string()))?;
    let data = arboard::ImageData {
        width: surface.width() as usize,
        height: surface.height() as usize,
        bytes: std::borrow::Cow::Owned(surface.to_straight_rgba8()),
    };
    clip.set_image(data)
        .map_err(|e| ShotError::clipboard(e.to_string()))?;
    tracing::debug!("copied image to clipboard");
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(surface: &RenderSurface) -> ShotResult<()> {
    if surface.is_empty() {
        return Err(ShotError::surface("nothing rendered yet"));
    }
    Err(ShotError::clipboard("built without clipboard support"))
}

#[cfg(test)]
#[path = "../../tests/unit/export/clipboard.rs"]
mod tests;
