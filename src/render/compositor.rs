use rand::Rng;

use crate::{
    assets::decode::Bitmap,
    config::model::LayoutConfig,
    effects::{
        composite::{mask_in_place, over_in_place},
        noise::scatter_speckles,
    },
    foundation::{
        core::{Affine, LogicalSize, Rect},
        error::{ShotError, ShotResult},
    },
    layout::solver::compute_layout_within,
    render::{
        chrome::draw_chrome,
        raster::{ScenePass, coverage_mask, pixmap_dims},
        shadow::cast_shadow,
        shapes::rounded_rect_path,
        surface::RenderSurface,
    },
};

/// Per-compositor output settings; not part of the user-facing controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Device pixel ratio of the target display.
    pub device_scale: f64,
    /// Largest surface side in device pixels; padding shrinks to fit.
    pub max_surface_side: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            device_scale: 1.0,
            max_surface_side: Self::DEFAULT_MAX_SIDE,
        }
    }
}

impl RenderSettings {
    pub const MIN_SCALE: f64 = 0.25;
    pub const MAX_SCALE: f64 = 8.0;
    pub const DEFAULT_MAX_SIDE: u32 = 8192;

    /// Effective scale: non-finite or non-positive values fall back to 1.0.
    pub fn scale(&self) -> f64 {
        if !self.device_scale.is_finite() || self.device_scale <= 0.0 {
            return 1.0;
        }
        self.device_scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
    }

    /// Effective surface side limit, within what the rasterizer can address.
    pub fn max_side(&self) -> u32 {
        self.max_surface_side.clamp(1, u32::from(u16::MAX))
    }
}

/// Owns the output surface and repaints it from `(Bitmap, LayoutConfig)`.
#[derive(Debug, Default)]
pub struct Compositor {
    settings: RenderSettings,
    surface: RenderSurface,
}

impl Compositor {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            surface: RenderSurface::default(),
        }
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Result of the last successful render; empty before the first one.
    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    /// Full repaint with fresh noise randomness.
    ///
    /// Without a bitmap this is a no-op that leaves the surface untouched.
    pub fn render(&mut self, bitmap: Option<&Bitmap>, config: &LayoutConfig) -> ShotResult<()> {
        self.render_with_rng(bitmap, config, &mut rand::thread_rng())
    }

    /// Full repaint drawing noise from `rng`.
    #[tracing::instrument(skip_all, fields(scale = self.settings.scale()))]
    pub fn render_with_rng<R: Rng + ?Sized>(
        &mut self,
        bitmap: Option<&Bitmap>,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> ShotResult<()> {
        let Some(bitmap) = bitmap else {
            tracing::debug!("no bitmap loaded, skipping render");
            return Ok(());
        };
        // Built off to the side so a failed pass keeps the previous surface.
        self.surface = compose(bitmap, config, self.settings, rng)?;
        Ok(())
    }
}

fn compose<R: Rng + ?Sized>(
    bitmap: &Bitmap,
    config: &LayoutConfig,
    settings: RenderSettings,
    rng: &mut R,
) -> ShotResult<RenderSurface> {
    let scale = settings.scale();
    let max_side = settings.max_side();
    let layout = compute_layout_within(
        bitmap.width(),
        bitmap.height(),
        config,
        f64::from(max_side) / scale,
    )
    .snapped(scale);
    let (width, height) = layout.canvas.to_pixels(scale);
    // Only reachable when the card alone is larger than the limit.
    if width.max(height) > max_side {
        return Err(ShotError::surface(format!(
            "{}x{} bitmap needs a {width}x{height} surface at scale {scale}, limit is {max_side}",
            bitmap.width(),
            bitmap.height()
        )));
    }
    let (w16, h16) = pixmap_dims(width, height)?;
    let to_device = Affine::scale(scale);

    // Clip bounds follow the allocated pixels, not the unrounded logical size.
    let bounds = LogicalSize::new(f64::from(width) / scale, f64::from(height) / scale);
    let outer_clip = coverage_mask(
        w16,
        h16,
        &rounded_rect_path(
            Rect::new(0.0, 0.0, bounds.width, bounds.height),
            layout.outer_radius,
        ),
        to_device,
    );

    let mut canvas = config
        .background
        .to_premul()
        .to_array()
        .repeat((width as usize) * (height as usize));

    let card_clip = coverage_mask(
        w16,
        h16,
        &rounded_rect_path(layout.card, layout.inner_radius),
        to_device,
    );

    if let Some(params) = config.shadow.params() {
        cast_shadow(
            &mut canvas,
            &card_clip,
            (width, height),
            &layout,
            params,
            scale,
        )?;
    }

    let mut card = ScenePass::new(w16, h16);
    if let Some(bar) = layout.chrome_bar {
        draw_chrome(&mut card, bar, config.chrome, to_device);
    }
    card.draw_bitmap(
        bitmap,
        to_device * Affine::translate(layout.image.origin().to_vec2()),
    )?;
    let mut card = card.finish();
    mask_in_place(&mut card, &card_clip)?;
    over_in_place(&mut canvas, &card)?;

    let density = config.noise.density();
    if density > 0.0 {
        let n = scatter_speckles(&mut canvas, width, height, density, rng)?;
        tracing::debug!(speckles = n, "scattered noise");
    }

    mask_in_place(&mut canvas, &outer_clip)?;

    tracing::debug!(width, height, "rendered surface");
    RenderSurface::from_parts(width, height, scale, canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
