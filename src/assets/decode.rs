use std::sync::Arc;

use crate::foundation::error::{ShotError, ShotResult};

/// Decoded, immutable source image in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl Bitmap {
    /// Wrap straight-alpha RGBA8 pixels, premultiplying them.
    pub fn from_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> ShotResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ShotError::decode("bitmap size overflow"))?;
        if width == 0 || height == 0 {
            return Err(ShotError::decode("bitmap has zero area"));
        }
        if rgba.len() != expected {
            return Err(ShotError::decode(format!(
                "expected {expected} rgba bytes for {width}x{height}, got {}",
                rgba.len()
            )));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

/// Decode an encoded image (PNG, JPEG, WebP, ...) into a [`Bitmap`].
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_bitmap(bytes: &[u8]) -> ShotResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| ShotError::decode(e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "decoded bitmap");
    Bitmap::from_rgba8(width, height, rgba.into_raw())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
