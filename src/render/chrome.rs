use crate::{
    config::{color::Color, model::ChromeTheme},
    foundation::core::{Affine, Point, Rect},
    render::{raster::ScenePass, shapes::circle_path},
};

pub const DOT_RADIUS: f64 = 6.0;
pub const DOT_SPACING: f64 = 20.0;
/// Distance from the bar's left edge to the first dot's centre.
pub const DOT_MARGIN: f64 = 18.0;

pub const DOT_COLORS: [Color; 3] = [
    Color::rgb(0xff, 0x5f, 0x57),
    Color::rgb(0xfe, 0xbc, 0x2e),
    Color::rgb(0x28, 0xc8, 0x40),
];

pub fn bar_color(theme: ChromeTheme) -> Option<Color> {
    match theme {
        ChromeTheme::None => None,
        ChromeTheme::Light => Some(Color::rgb(0xe5, 0xe7, 0xeb)),
        ChromeTheme::Dark => Some(Color::rgb(0x1f, 0x29, 0x37)),
    }
}

/// Centres of the three title-bar dots inside `bar`.
pub fn dot_centers(bar: Rect) -> [Point; 3] {
    let cy = bar.center().y;
    std::array::from_fn(|i| Point::new(bar.x0 + DOT_MARGIN + DOT_SPACING * i as f64, cy))
}

/// Queue the title bar fill and its dots; clipping to the card happens later.
pub fn draw_chrome(pass: &mut ScenePass, bar: Rect, theme: ChromeTheme, transform: Affine) {
    let Some(fill) = bar_color(theme) else {
        return;
    };
    pass.fill_rect(bar, transform, fill);
    for (center, color) in dot_centers(bar).into_iter().zip(DOT_COLORS) {
        pass.fill_path(&circle_path(center, DOT_RADIUS), transform, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/chrome.rs"]
mod tests;
