use crate::{
    config::{color::Color, model::ShadowParams},
    effects::{
        blur::{blur_extent, blur_rgba8_premul},
        composite::over_px,
    },
    foundation::{
        core::{Affine, Rect, Vec2},
        error::{ShotError, ShotResult},
        math::{mul_div255_u8, unit_to_u8},
    },
    layout::solver::CardLayout,
    render::{raster::ScenePass, shapes::rounded_rect_path},
};

/// Pixel-aligned sub-rectangle of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl Region {
    fn around(rect: Rect, margin: f64, width: u32, height: u32) -> Option<Self> {
        let r = rect.inflate(margin, margin);
        let x0 = r.x0.floor().clamp(0.0, f64::from(width)) as u32;
        let y0 = r.y0.floor().clamp(0.0, f64::from(height)) as u32;
        let x1 = r.x1.ceil().clamp(0.0, f64::from(width)) as u32;
        let y1 = r.y1.ceil().clamp(0.0, f64::from(height)) as u32;
        (x1 > x0 && y1 > y0).then_some(Self {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }

    /// Composite `shadow` (sized to the region) over `dst`, attenuated by
    /// the inverse of `card_mask` alpha. Pixels fully under the card are
    /// skipped.
    fn over_outside(self, dst: &mut [u8], stride: u32, shadow: &[u8], card_mask: &[u8]) {
        let row_len = (self.w as usize) * 4;
        for (i, row) in (self.y..self.y + self.h).enumerate() {
            let start = ((row as usize) * (stride as usize) + self.x as usize) * 4;
            let dst_row = &mut dst[start..start + row_len];
            let mask_row = &card_mask[start..start + row_len];
            let src_row = &shadow[i * row_len..(i + 1) * row_len];
            for ((d, m), s) in dst_row
                .chunks_exact_mut(4)
                .zip(mask_row.chunks_exact(4))
                .zip(src_row.chunks_exact(4))
            {
                let keep = 255 - u16::from(m[3]);
                if keep == 0 || s[3] == 0 {
                    continue;
                }
                let s = [s[0], s[1], s[2], s[3]].map(|c| mul_div255_u8(u16::from(c), keep));
                d.copy_from_slice(&over_px([d[0], d[1], d[2], d[3]], s));
            }
        }
    }
}

/// Cast a drop shadow of the card onto `canvas`.
///
/// The caster is the card's rounded silhouette, not the bitmap. After the
/// blur every shadow pixel under the card is knocked out through
/// `card_mask`, so the shadow only ever shows around the card.
pub fn cast_shadow(
    canvas: &mut [u8],
    card_mask: &[u8],
    (width, height): (u32, u32),
    layout: &CardLayout,
    params: ShadowParams,
    scale: f64,
) -> ShotResult<()> {
    let caster = layout.card + Vec2::new(0.0, params.offset_y);
    let sigma = params.blur * 0.5 * scale;
    let extent = blur_extent(sigma);

    let device_caster = Affine::scale(scale).transform_rect_bbox(caster);
    let Some(region) = Region::around(device_caster, f64::from(extent) + 1.0, width, height)
    else {
        tracing::debug!("shadow falls outside the surface");
        return Ok(());
    };

    let (rw, rh) = crate::render::raster::pixmap_dims(region.w, region.h)?;
    let to_region =
        Affine::translate((-f64::from(region.x), -f64::from(region.y))) * Affine::scale(scale);
    let mut pass = ScenePass::new(rw, rh);
    pass.fill_path(
        &rounded_rect_path(caster, layout.inner_radius),
        to_region,
        Color::rgba(0, 0, 0, unit_to_u8(params.alpha)),
    );
    let shadow = pass.finish();

    let expected = (width as usize) * (height as usize) * 4;
    if canvas.len() != expected || card_mask.len() != expected {
        return Err(ShotError::surface("shadow buffers must match the surface size"));
    }
    let shadow = blur_rgba8_premul(&shadow, region.w, region.h, sigma)?;
    region.over_outside(canvas, width, &shadow, card_mask);

    tracing::debug!(extent, sigma, region_w = region.w, region_h = region.h, "cast shadow");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/shadow.rs"]
mod tests;
