use crate::{
    config::model::{Aspect, ChromeTheme, LayoutConfig, Position},
    foundation::core::{LogicalSize, Point, Rect, Vec2, non_negative},
    render::shapes::effective_radius,
};

/// Height of the faux browser title bar, in logical units.
pub const CHROME_BAR_HEIGHT: f64 = 32.0;

/// Resolved geometry for one render pass, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub canvas: LogicalSize,
    /// Rounded region holding the chrome bar and the image.
    pub card: Rect,
    pub chrome_bar: Option<Rect>,
    /// Where the bitmap is drawn at natural size.
    pub image: Rect,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

pub fn compute_layout(image_width: u32, image_height: u32, config: &LayoutConfig) -> CardLayout {
    compute_layout_within(image_width, image_height, config, f64::INFINITY)
}

/// Like [`compute_layout`], but padding shrinks so that neither canvas side
/// exceeds `max_side` logical units. A card larger than `max_side` keeps
/// zero padding and overflows the bound.
pub fn compute_layout_within(
    image_width: u32,
    image_height: u32,
    config: &LayoutConfig,
    max_side: f64,
) -> CardLayout {
    let chrome_h = match config.chrome {
        ChromeTheme::None => 0.0,
        ChromeTheme::Light | ChromeTheme::Dark => CHROME_BAR_HEIGHT,
    };

    let card_w = f64::from(image_width);
    let card_h = f64::from(image_height) + chrome_h;

    // Square and widescreen canvases never exceed the padded card's larger side.
    let room = ((max_side - card_w.max(card_h)) * 0.5).max(0.0);
    let requested = config.padding.px();
    let padding = requested.min(room);
    if padding < requested {
        tracing::debug!(requested, padding, max_side, "clamped padding to surface limit");
    }

    let mut width = card_w + padding * 2.0;
    let mut height = card_h + padding * 2.0;
    match config.aspect {
        Aspect::Auto => {}
        Aspect::Square => {
            let side = width.max(height);
            width = side;
            height = side;
        }
        // Overrides the padding-derived height even when that crops the card.
        Aspect::Widescreen => height = width * 9.0 / 16.0,
    }
    let canvas = LogicalSize::new(width, height);

    let origin = place(config.position, canvas, card_w, card_h, padding);
    let card = Rect::new(origin.x, origin.y, origin.x + card_w, origin.y + card_h);
    let chrome_bar =
        (chrome_h > 0.0).then(|| Rect::new(card.x0, card.y0, card.x1, card.y0 + chrome_h));
    let image = Rect::new(card.x0, card.y0 + chrome_h, card.x1, card.y1);

    let outer_radius = effective_radius(width, height, config.outer_radius);
    let inner_radius = effective_radius(card_w, card_h, config.inner_radius);

    tracing::debug!(
        width,
        height,
        card_x = card.x0,
        card_y = card.y0,
        outer_radius,
        inner_radius,
        "computed card layout"
    );

    CardLayout {
        canvas,
        card,
        chrome_bar,
        image,
        outer_radius,
        inner_radius,
    }
}

impl CardLayout {
    /// Shift the card so its origin lands on a whole device pixel, keeping the
    /// bitmap unresampled at integer scales.
    pub fn snapped(self, scale: f64) -> Self {
        if !scale.is_finite() || scale <= 0.0 {
            return self;
        }
        let snap = |v: f64| (v * scale).round() / scale - v;
        let delta = Vec2::new(snap(self.card.x0), snap(self.card.y0));
        Self {
            card: self.card + delta,
            chrome_bar: self.chrome_bar.map(|r| r + delta),
            image: self.image + delta,
            ..self
        }
    }
}

/// Top-left corner of a `card_w` x `card_h` card inside `canvas`.
pub fn place(
    position: Position,
    canvas: LogicalSize,
    card_w: f64,
    card_h: f64,
    padding: f64,
) -> Point {
    let padding = non_negative(padding);
    let center_x = (canvas.width - card_w) * 0.5;
    let center_y = (canvas.height - card_h) * 0.5;
    let left = padding;
    let right = canvas.width - card_w - padding;
    let top = padding;
    let bottom = canvas.height - card_h - padding;

    let (x, y) = match position {
        Position::Center => (center_x, center_y),
        Position::Top => (center_x, top),
        Position::Bottom => (center_x, bottom),
        Position::TopLeft => (left, top),
        Position::TopRight => (right, top),
        Position::BottomLeft => (left, bottom),
        Position::BottomRight => (right, bottom),
    };
    Point::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
