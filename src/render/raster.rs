//! Thin scene-pass wrapper over `vello_cpu`: every pass renders into a fresh,
//! transparent pixmap which the compositor then combines with pixel kernels.

use std::sync::Arc;

use crate::{
    assets::decode::Bitmap,
    config::color::Color,
    foundation::{
        core::{Affine, BezPath, Rect},
        error::{ShotError, ShotResult},
    },
};

/// Validate a pixel extent against the `u16` limit of the raster backend.
pub fn pixmap_dims(width: u32, height: u32) -> ShotResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ShotError::surface(format!("surface width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ShotError::surface(format!("surface height {height} exceeds u16")))?;
    Ok((w, h))
}

/// One scene pass: a sequence of fills rendered together into a new pixmap.
pub struct ScenePass {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl ScenePass {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        }
    }

    pub fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Color) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub fn fill_rect(&mut self, rect: Rect, transform: Affine, color: Color) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Draw `bitmap` at natural size with its top-left corner at the origin
    /// of `transform`.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, transform: Affine) -> ShotResult<()> {
        let paint = bitmap_paint(bitmap)?;
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(bitmap.width()),
            f64::from(bitmap.height()),
        ));
        Ok(())
    }

    /// Rasterize all queued fills; returns premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Coverage mask of `path`: opaque white where covered, alpha = coverage.
pub fn coverage_mask(width: u16, height: u16, path: &BezPath, transform: Affine) -> Vec<u8> {
    let mut pass = ScenePass::new(width, height);
    pass.fill_path(path, transform, Color::rgb(255, 255, 255));
    pass.finish()
}

fn bitmap_paint(bitmap: &Bitmap) -> ShotResult<vello_cpu::Image> {
    let (w, h) = pixmap_dims(bitmap.width(), bitmap.height())?;
    let bytes = bitmap.pixels();
    let area = usize::from(w) * usize::from(h);
    if bytes.len() != area * 4 {
        return Err(ShotError::surface("bitmap byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(area);
    for px in bytes.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
