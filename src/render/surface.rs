use crate::foundation::{
    core::LogicalSize,
    error::{ShotError, ShotResult},
};

/// Raster output of one render pass, premultiplied RGBA8.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    scale: f64,
    data: Vec<u8>,
}

impl RenderSurface {
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        scale: f64,
        data: Vec<u8>,
    ) -> ShotResult<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(ShotError::surface("surface byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            scale,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device scale the surface was rendered at.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `true` until the first successful render.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn logical_size(&self) -> LogicalSize {
        if self.scale <= 0.0 {
            return LogicalSize::new(0.0, 0.0);
        }
        LogicalSize::new(
            f64::from(self.width) / self.scale,
            f64::from(self.height) / self.scale,
        )
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy of the pixels with alpha un-premultiplied, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[0..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
