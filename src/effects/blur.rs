//! Shadow blur: a Gaussian approximated by three successive box filters.
//!
//! Each box pass keeps a running sum per channel, so the cost per pixel does
//! not depend on the blur radius. Pixels outside the buffer count as
//! transparent, which is what a shadow region padded by [`blur_extent`] needs.

use crate::foundation::error::{ShotError, ShotResult};

/// Sigmas above this are treated as this; the shadow is a flat wash by then.
const MAX_SIGMA: f64 = 2048.0;

/// Radii of the three box passes whose combination approximates a Gaussian
/// of standard deviation `sigma`.
pub fn box_radii(sigma: f64) -> [u32; 3] {
    if !sigma.is_finite() || sigma <= 0.0 {
        return [0; 3];
    }
    let s2 = sigma.min(MAX_SIGMA).powi(2);
    let ideal = (4.0 * s2 + 1.0).sqrt();
    let mut lo = ideal.floor() as i64;
    if lo % 2 == 0 {
        lo -= 1;
    }
    let lo = lo.max(1);
    let hi = lo + 2;
    let lo_f = lo as f64;
    // How many passes use the narrower box so the variances add up to sigma^2.
    let narrow = ((12.0 * s2 - 3.0 * lo_f * lo_f - 12.0 * lo_f - 9.0) / (-4.0 * lo_f - 4.0))
        .round()
        .clamp(0.0, 3.0) as usize;
    std::array::from_fn(|i| {
        let width = if i < narrow { lo } else { hi };
        ((width - 1) / 2) as u32
    })
}

/// Furthest distance, in pixels, that a blur of `sigma` moves any coverage.
pub fn blur_extent(sigma: f64) -> u32 {
    box_radii(sigma).iter().sum()
}

/// Gaussian-like blur over premultiplied RGBA8.
pub fn blur_rgba8_premul(src: &[u8], width: u32, height: u32, sigma: f64) -> ShotResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ShotError::surface("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ShotError::surface(format!(
            "blur buffer holds {} bytes, {width}x{height} needs {expected_len}",
            src.len()
        )));
    }

    let radii = box_radii(sigma);
    let mut out = src.to_vec();
    if expected_len == 0 || radii == [0; 3] {
        return Ok(out);
    }

    let (w, h) = (width as usize, height as usize);
    let mut scratch = vec![0u8; expected_len];
    for &r in radii.iter().filter(|&&r| r > 0) {
        box_rows(&out, &mut scratch, w, h, r as usize);
        box_columns(&scratch, &mut out, w, h, r as usize);
    }
    Ok(out)
}

fn box_rows(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    let div = (2 * r + 1) as u32;
    for y in 0..h {
        let row = &src[y * w * 4..(y + 1) * w * 4];
        let out = &mut dst[y * w * 4..(y + 1) * w * 4];
        let mut sum = [0u32; 4];
        for px in row.chunks_exact(4).take(r + 1) {
            for c in 0..4 {
                sum[c] += u32::from(px[c]);
            }
        }
        for x in 0..w {
            for c in 0..4 {
                out[x * 4 + c] = ((sum[c] + div / 2) / div) as u8;
            }
            if x + r + 1 < w {
                for c in 0..4 {
                    sum[c] += u32::from(row[(x + r + 1) * 4 + c]);
                }
            }
            if x >= r {
                for c in 0..4 {
                    sum[c] -= u32::from(row[(x - r) * 4 + c]);
                }
            }
        }
    }
}

// Sweeps whole rows with one running sum per column to stay cache friendly.
fn box_columns(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    let div = (2 * r + 1) as u32;
    let stride = w * 4;
    let mut sums = vec![0u32; stride];
    for row in src.chunks_exact(stride).take(r + 1) {
        for (s, &v) in sums.iter_mut().zip(row) {
            *s += u32::from(v);
        }
    }
    for y in 0..h {
        for (d, &s) in dst[y * stride..(y + 1) * stride].iter_mut().zip(&sums) {
            *d = ((s + div / 2) / div) as u8;
        }
        if y + r + 1 < h {
            let enter = &src[(y + r + 1) * stride..(y + r + 2) * stride];
            for (s, &v) in sums.iter_mut().zip(enter) {
                *s += u32::from(v);
            }
        }
        if y >= r {
            let leave = &src[(y - r) * stride..(y - r + 1) * stride];
            for (s, &v) in sums.iter_mut().zip(leave) {
                *s -= u32::from(v);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
