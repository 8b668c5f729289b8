use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Rect, non_negative};

const PATH_TOLERANCE: f64 = 0.1;

/// Largest corner radius that keeps a `width` x `height` rounded rect from
/// self-intersecting: `clamp(radius, 0, min(width, height) / 2)`.
pub fn effective_radius(width: f64, height: f64, radius: f64) -> f64 {
    let limit = non_negative(width).min(non_negative(height)) * 0.5;
    non_negative(radius).min(limit)
}

/// Closed rounded-rectangle outline shared by every drawing step.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> BezPath {
    let rect = rect.abs();
    let r = effective_radius(rect.width(), rect.height(), radius);
    if r <= 0.0 {
        return rect.to_path(PATH_TOLERANCE);
    }
    kurbo::RoundedRect::from_rect(rect, r).to_path(PATH_TOLERANCE)
}

/// Circle outline used for the chrome bar dots.
pub fn circle_path(center: kurbo::Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, non_negative(radius)).to_path(PATH_TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
