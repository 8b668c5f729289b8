pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Size in logical (density-independent) units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel extent of this size at `scale`; never smaller than 1x1.
    pub fn to_pixels(self, scale: f64) -> (u32, u32) {
        fn px(v: f64) -> u32 {
            let v = v.round();
            if !v.is_finite() || v < 1.0 {
                1
            } else if v > f64::from(u32::MAX) {
                u32::MAX
            } else {
                v as u32
            }
        }
        (px(self.width * scale), px(self.height * scale))
    }
}

/// Clamp a user-provided length to a finite, non-negative value.
pub fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
