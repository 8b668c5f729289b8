use crate::foundation::{
    error::{ShotError, ShotResult},
    math::{add_sat_u8, mul_div255_u8},
};

fn check_pair(what: &str, a: &[u8], b: &[u8]) -> ShotResult<()> {
    if a.len() != b.len() || !a.len().is_multiple_of(4) {
        return Err(ShotError::surface(format!(
            "{what} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

/// Porter-Duff source-over of premultiplied `src` onto `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> ShotResult<()> {
    check_pair("over_in_place", dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub fn over_px(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    out[3] = add_sat_u8(src[3], mul_div255_u8(u16::from(dst[3]), inv));
    for c in 0..3 {
        out[c] = add_sat_u8(src[c], mul_div255_u8(u16::from(dst[c]), inv));
    }
    out
}

/// Keep `buf` only where `mask` has coverage (multiply by mask alpha).
pub fn mask_in_place(buf: &mut [u8], mask: &[u8]) -> ShotResult<()> {
    check_pair("mask_in_place", buf, mask)?;
    for (d, m) in buf.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        let w = m[3];
        if w == 255 {
            continue;
        }
        let w16 = u16::from(w);
        for c in d.iter_mut() {
            *c = mul_div255_u8(u16::from(*c), w16);
        }
    }
    Ok(())
}

/// Soft-light blend of an opaque gray `level` onto one premultiplied pixel.
pub fn soft_light_gray_px(dst: [u8; 4], level: u8, opacity: f32) -> [u8; 4] {
    let s = f32::from(level) / 255.0;
    blend_over_px(dst, [s, s, s], opacity, |s, d| {
        if s <= 0.5 {
            d - (1.0 - 2.0 * s) * d * (1.0 - d)
        } else {
            let g = if d <= 0.25 {
                ((16.0 * d - 12.0) * d + 4.0) * d
            } else {
                d.sqrt()
            };
            d + (2.0 * s - 1.0) * (g - d)
        }
    })
}

/// Source-over with a separable blend applied to unpremultiplied channels:
/// `out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da`.
fn blend_over_px<F>(dst: [u8; 4], src_rgb: [f32; 3], opacity: f32, blend_fn: F) -> [u8; 4]
where
    F: Fn(f32, f32) -> f32,
{
    let sa = opacity.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);

    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = src_rgb[c].clamp(0.0, 1.0);
        let dp = f32::from(dst[c]) / 255.0;
        let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
        let b = blend_fn(sc, dc).clamp(0.0, 1.0);
        let p = (sc * sa * (1.0 - da) + dp * (1.0 - sa) + b * sa * da).clamp(0.0, out_a);
        out[c] = (p * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
