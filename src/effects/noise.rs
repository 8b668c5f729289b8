use rand::Rng;

use crate::{
    effects::composite::soft_light_gray_px,
    foundation::error::{ShotError, ShotResult},
};

/// Opacity of a single speckle.
pub const SPECKLE_OPACITY: f32 = 0.12;

/// Speckles per pixel at full density.
const SPECKLES_PER_PIXEL: f64 = 0.25;

/// Number of speckles scattered over a `width` x `height` pixel area.
pub fn speckle_count(width: u32, height: u32, density: f64) -> usize {
    if !density.is_finite() || density <= 0.0 {
        return 0;
    }
    let area = f64::from(width) * f64::from(height);
    (area * density.min(1.0) * SPECKLES_PER_PIXEL).round() as usize
}

/// Scatter grain over a premultiplied RGBA8 buffer.
///
/// Each speckle is a 1 or 2 pixel square of a random gray level, soft-light
/// blended so it shifts existing colour instead of replacing it. Returns the
/// number of speckles drawn.
pub fn scatter_speckles<R: Rng + ?Sized>(
    buf: &mut [u8],
    width: u32,
    height: u32,
    density: f64,
    rng: &mut R,
) -> ShotResult<usize> {
    let expected = (width as usize) * (height as usize) * 4;
    if buf.len() != expected {
        return Err(ShotError::surface(
            "scatter_speckles expects buf matching width*height*4",
        ));
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }

    let count = speckle_count(width, height, density);
    for _ in 0..count {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        let level: u8 = rng.r#gen();
        let size: u32 = rng.gen_range(1..=2);

        for yy in y..(y + size).min(height) {
            for xx in x..(x + size).min(width) {
                let idx = ((yy as usize) * (width as usize) + (xx as usize)) * 4;
                let px = [buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]];
                let out = soft_light_gray_px(px, level, SPECKLE_OPACITY);
                buf[idx..idx + 4].copy_from_slice(&out);
            }
        }
    }
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
