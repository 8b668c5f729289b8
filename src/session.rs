use rand::Rng;

use crate::{
    assets::decode::{Bitmap, decode_bitmap},
    config::model::LayoutConfig,
    export,
    foundation::error::ShotResult,
    render::{
        compositor::{Compositor, RenderSettings},
        surface::RenderSurface,
    },
};

/// Editing state: the loaded image, the current controls and the last render.
///
/// Every mutation that could change the output triggers a full repaint.
/// Failures leave all three pieces of state as they were.
#[derive(Debug, Default)]
pub struct Session {
    bitmap: Option<Bitmap>,
    config: LayoutConfig,
    compositor: Compositor,
}

impl Session {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            bitmap: None,
            config: LayoutConfig::default(),
            compositor: Compositor::new(settings),
        }
    }

    /// Start from an existing configuration instead of the defaults.
    pub fn with_config(settings: RenderSettings, config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::new(settings)
        }
    }

    /// Decode `bytes` and make them the current image.
    pub fn load_image(&mut self, bytes: &[u8]) -> ShotResult<()> {
        self.load_image_with_rng(bytes, &mut rand::thread_rng())
    }

    pub fn load_image_with_rng<R: Rng + ?Sized>(
        &mut self,
        bytes: &[u8],
        rng: &mut R,
    ) -> ShotResult<()> {
        let bitmap = decode_bitmap(bytes)?;
        self.compositor.render_with_rng(Some(&bitmap), &self.config, rng)?;
        self.bitmap = Some(bitmap);
        Ok(())
    }

    /// Replace the controls; repaints only when an image is loaded.
    pub fn set_config(&mut self, config: LayoutConfig) -> ShotResult<()> {
        self.set_config_with_rng(config, &mut rand::thread_rng())
    }

    pub fn set_config_with_rng<R: Rng + ?Sized>(
        &mut self,
        config: LayoutConfig,
        rng: &mut R,
    ) -> ShotResult<()> {
        self.compositor
            .render_with_rng(self.bitmap.as_ref(), &config, rng)?;
        self.config = config;
        Ok(())
    }

    /// Restore the default controls.
    pub fn reset(&mut self) -> ShotResult<()> {
        self.set_config(LayoutConfig::default())
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    pub fn surface(&self) -> &RenderSurface {
        self.compositor.surface()
    }

    /// PNG bytes of the current output, `None` before anything was rendered.
    pub fn export_png(&self) -> ShotResult<Option<Vec<u8>>> {
        let surface = self.surface();
        if surface.is_empty() {
            return Ok(None);
        }
        export::png::encode_png(surface).map(Some)
    }

    /// Copy the current output to the system clipboard; a no-op before the first render.
    pub fn copy_to_clipboard(&self) -> ShotResult<()> {
        let surface = self.surface();
        if surface.is_empty() {
            tracing::debug!("nothing rendered, clipboard untouched");
            return Ok(());
        }
        export::clipboard::copy_to_clipboard(surface)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
